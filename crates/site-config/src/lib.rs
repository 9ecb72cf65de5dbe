//! Site Config
//!
//! Typed configuration model of the marketing site, plus everything the
//! admin panel does with it: loading from the config API, list editing,
//! form painting and harvesting, and the concurrent save pipeline.

pub mod api;
pub mod binder;
pub mod editor;
pub mod error;
pub mod fallback;
pub mod http;
pub mod model;
pub mod render;
pub mod resource;
pub mod save;
pub mod store;

pub use api::{ConfigApi, UploadResponse, WriteAck, WriteResponse};
pub use binder::{Control, FormFields};
pub use editor::{AddState, Confirmation, FieldValue, ListEditor, ListEntry};
pub use error::{ApiError, EditError, EditResult, LoadError, SaveError, UploadError};
pub use fallback::{FallbackStorage, MemoryStorage};
pub use http::HttpConfigApi;
pub use render::SectionForm;
pub use resource::Resource;
pub use save::{save_all, save_section, SaveOutcome, SavePlan, SaveReport, WriteRequest};
pub use store::ConfigStore;
