pub mod member_edit_modal;

pub use member_edit_modal::MemberEditModal;
