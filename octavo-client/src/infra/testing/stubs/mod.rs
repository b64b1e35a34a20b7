pub mod books;

pub use books::TestBookService;
