mod blogs;
pub use blogs::Blogs;

mod cases;
pub use cases::Cases;

mod products;
pub use products::Products;

mod contacts;
pub use contacts::Contacts;
