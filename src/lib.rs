use logcall::logcall;
use std::ffi::CString;
use std::os::raw::c_char;

use crate::c_util::{
    assert_pointer, assert_str, assert_string, create_page_context, drop_any, get_ref,
    null_on_error, render_page, search, set_error, start_lib_init, SearchResults,
};
use crate::tantivy_util::SearchError;

mod c_util;
pub mod config;
pub mod page;
pub mod preview;
pub mod site;
pub mod tantivy_util;

pub use crate::page::PageContext;

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[logcall]
#[no_mangle]
pub extern "C" fn init_lib(
    log_level_ptr: *const c_char,
    base_url_ptr: *const c_char,
    language_ptr: *const c_char,
    utf8_lenient: bool,
    error_buffer: *mut *mut c_char,
) {
    let result = || -> Result<(), SearchError> {
        let log_level = assert_string(log_level_ptr)?;
        let base_url = assert_string(base_url_ptr)?;
        let language = assert_string(language_ptr)?;
        start_lib_init(log_level.as_str(), base_url, language, utf8_lenient);
        Ok(())
    };

    if let Err(err) = result() {
        set_error(&err.to_string(), error_buffer);
    }
}

#[logcall]
#[no_mangle]
pub extern "C" fn page_context_create(
    documents_json_ptr: *const c_char,
    error_buffer: *mut *mut c_char,
) -> *mut PageContext {
    let result = || -> Result<*mut PageContext, SearchError> {
        let documents_json = assert_str(documents_json_ptr)?;
        create_page_context(&documents_json)
    };

    null_on_error(result(), error_buffer)
}

#[logcall]
#[no_mangle]
pub extern "C" fn page_context_num_docs(
    context_ptr: *mut PageContext,
    error_buffer: *mut *mut c_char,
) -> u64 {
    let result = || -> Result<u64, SearchError> {
        let context = assert_pointer(context_ptr)?;
        Ok(context.num_docs())
    };

    match result() {
        Ok(num_docs) => num_docs,
        Err(err) => {
            set_error(&err.to_string(), error_buffer);
            0
        }
    }
}

#[logcall]
#[no_mangle]
pub extern "C" fn page_context_search(
    context_ptr: *mut PageContext,
    query_ptr: *const c_char,
    error_buffer: *mut *mut c_char,
) -> *mut SearchResults {
    let result = || -> Result<*mut SearchResults, SearchError> {
        let context = assert_pointer(context_ptr)?;
        let query = assert_str(query_ptr)?;
        search(&query, context)
    };

    null_on_error(result(), error_buffer)
}

/// Renders the page for `location_search` (the `?q=...` part of the URL) and
/// returns the resulting view as a JSON string owned by the caller.
#[logcall]
#[no_mangle]
pub extern "C" fn page_context_render(
    context_ptr: *mut PageContext,
    location_search_ptr: *const c_char,
    error_buffer: *mut *mut c_char,
) -> *mut c_char {
    let result = || -> Result<*mut c_char, SearchError> {
        let context = assert_pointer(context_ptr)?;
        let location_search = assert_str(location_search_ptr)?;
        render_page(&location_search, context)
    };

    null_on_error(result(), error_buffer)
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[logcall]
#[no_mangle]
pub extern "C" fn page_context_free(context_ptr: *mut PageContext) {
    drop_any(context_ptr)
}

#[logcall]
#[no_mangle]
pub extern "C" fn search_results_get_size(
    results_ptr: *mut SearchResults,
    error_buffer: *mut *mut c_char,
) -> usize {
    let result = || -> Result<usize, SearchError> {
        let results = assert_pointer(results_ptr)?;
        Ok(results.size)
    };

    match result() {
        Ok(size) => size,
        Err(err) => {
            set_error(&err.to_string(), error_buffer);
            0
        }
    }
}

#[logcall]
#[no_mangle]
pub extern "C" fn search_results_get_ref(
    results_ptr: *mut SearchResults,
    index: usize,
    error_buffer: *mut *mut c_char,
) -> *mut c_char {
    let result = || -> Result<*mut c_char, SearchError> {
        let results = assert_pointer(results_ptr)?;
        get_ref(index, results)
    };

    null_on_error(result(), error_buffer)
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[logcall]
#[no_mangle]
pub extern "C" fn search_results_free(results_ptr: *mut SearchResults) {
    drop_any(results_ptr)
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[logcall]
#[no_mangle]
pub extern "C" fn string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
