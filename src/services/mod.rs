pub mod collection;
pub mod endpoint;
pub mod fetch;
pub mod member_editor;
pub mod normalize;

pub use collection::{load_collection, ActivationToken, FetchState, ResourceController};
pub use endpoint::{codespace_name, collection_url, record_url, Collection};
pub use fetch::{ApiTransport, FetchError, HttpTransport};
pub use member_editor::{
    submit_patch, CommitRequest, DraftField, MemberDraft, MemberEditor, SAVE_SUCCESS_DISMISS,
};
pub use normalize::{decode_records, normalize_records};
