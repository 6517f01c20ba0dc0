mod context;
mod dom;
mod results;
mod view;

pub use self::context::PageContext;
pub use self::dom::Element;
pub use self::dom::Node;
pub use self::dom::Tag;
pub use self::results::ResultRenderer;
pub use self::view::PageView;
pub use self::view::SearchStatus;
pub use self::view::SearchView;
