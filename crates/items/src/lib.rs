//! Item catalog domain module.
//!
//! This crate contains the catalog's business rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage):
//! - value objects (`Price`, `Category`, `Seller`, `Picture`, ...) with validating factories
//! - the immutable `Item` aggregate and its derived predicates
//! - the search criteria builder and the filter/sort/paginate pipeline
//! - the `ItemRepository` port implemented by persistence adapters

pub mod attribute;
pub mod category;
pub mod criteria;
pub mod item;
pub mod payment;
pub mod picture;
pub mod price;
pub mod repository;
pub mod search;
pub mod seller;
pub mod shipping;
pub mod warranty;

pub use attribute::{AttributeValueType, ItemAttribute};
pub use category::Category;
pub use criteria::{
    build_criteria, SearchCriteria, SearchRequest, SortDirection, SortField, SortKey,
    DEFAULT_LIMIT, MAX_PAGE_SIZE,
};
pub use item::{Item, NewItem, ACTIVE_STATUS};
pub use payment::{NewPaymentMethod, PaymentMethod};
pub use picture::{NewPicture, Picture};
pub use price::Price;
pub use repository::ItemRepository;
pub use search::{Pagination, SearchPage};
pub use seller::{NewSeller, Seller, SellerId};
pub use shipping::{NewShippingMethod, ShippingMethod};
pub use warranty::Warranty;
