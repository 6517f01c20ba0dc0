mod util;

pub use self::util::set_error;
pub use self::util::assert_string;
pub use self::util::assert_str;
pub use self::util::assert_pointer;
pub use self::util::start_lib_init;
pub use self::util::create_page_context;
pub use self::util::search;
pub use self::util::get_ref;
pub use self::util::render_page;
pub use self::util::drop_any;
pub use self::util::null_on_error;
pub use self::util::SearchResults;
