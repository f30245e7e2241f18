pub mod dispatcher;
pub mod fallback;
pub mod proxy;
pub mod upstream;
