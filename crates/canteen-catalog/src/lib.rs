//! # Canteen Catalog
//!
//! 菜單、顧客與訂單的記憶體目錄，以及訂單摘要投影

pub mod browse;
pub mod listing;
pub mod repository;
pub mod seed;
pub mod submission;
pub mod summarizer;

// Re-export 主要類型
pub use browse::MenuBrowser;
pub use listing::{OrderDetail, OrderLine, OrderListing, OrderSort, SortDirection, SortKey};
pub use repository::{InMemoryCatalog, OrderCatalog};
pub use seed::{default_menu, seed_menu};
pub use submission::{OrderSubmission, PlacedOrder, SubmittedItem};
pub use summarizer::OrderSummarizer;
