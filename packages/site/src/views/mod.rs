mod blog;
pub use blog::Blog;

mod products;
pub use products::Products;
