// Базовые модули
pub mod consts;
pub mod config;
pub mod metrics;

// Ядро каталога: store -> filter -> paginator -> controller
pub mod record;
pub mod store;
pub mod filter;
pub mod paginator;
pub mod controller;

// Представление и интерактивная сессия
pub mod view;
pub mod session;
pub mod request;

// Удобные реэкспорты
pub use config::{DirectoryBuilder, DirectoryConfig, EmptyPagePolicy};
pub use controller::{
    on_page_requested, on_query_changed, DirectoryController, PageRequest, Transition, ViewState,
};
pub use filter::filter;
pub use paginator::{clamp_page, page_count, window};
pub use record::SchemeRecord;
pub use request::ViewRequest;
pub use store::RecordStore;
pub use view::PageView;
