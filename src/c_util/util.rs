use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use log::debug;

use crate::config;
use crate::page::{PageContext, PageView};
use crate::tantivy_util::{SearchError, SearchResult};

const POINTER_IS_NULL: &str = "Pointer is null";

/// Search hits handed across the C boundary.
pub struct SearchResults {
    pub results: Vec<SearchResult>,
    pub size: usize,
}

pub fn set_error(err: &str, error_buffer: *mut *mut c_char) {
    let err_str = match CString::new(err) {
        Ok(s) => s,
        Err(_) => return,
    };
    write_buffer(error_buffer, err_str);
}

fn write_buffer(error_buffer: *mut *mut c_char, err_str: CString) {
    unsafe {
        if !error_buffer.is_null() {
            *error_buffer = err_str.into_raw();
        }
    }
}

fn process_c_str<'a>(str_ptr: *const c_char) -> Result<Cow<'a, str>, SearchError> {
    if str_ptr.is_null() {
        return Err(SearchError(POINTER_IS_NULL.to_owned()));
    }
    let c_str = unsafe { CStr::from_ptr(str_ptr) };
    if config::current().utf8_lenient {
        return Ok(c_str.to_string_lossy());
    }
    c_str
        .to_str()
        .map(Cow::Borrowed)
        .map_err(|err| SearchError::from_err("Invalid UTF-8", &err.to_string()))
}

pub fn assert_string(str_ptr: *const c_char) -> Result<String, SearchError> {
    process_c_str(str_ptr).map(Cow::into_owned)
}

pub fn assert_str<'a>(str_ptr: *const c_char) -> Result<Cow<'a, str>, SearchError> {
    process_c_str(str_ptr)
}

pub fn assert_pointer<'a, T>(ptr: *mut T) -> Result<&'a mut T, SearchError> {
    if ptr.is_null() {
        return Err(SearchError(POINTER_IS_NULL.to_owned()));
    }
    Ok(unsafe { &mut *ptr })
}

pub fn into_c_string(value: String) -> Result<*mut c_char, SearchError> {
    CString::new(value)
        .map(CString::into_raw)
        .map_err(|err| SearchError::from_err("String contains a NUL byte", &err.to_string()))
}

pub fn start_lib_init(log_level: &str, base_url: String, language: String, utf8_lenient: bool) {
    match config::CONFIG.write() {
        Ok(mut config) => {
            config.update_utf8_lenient(utf8_lenient);
            config.update_base_url(base_url);
            config.update_language(language);
        }
        Err(e) => debug!("Failed to update config: {}", e),
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).try_init();
}

pub fn create_page_context(documents_json: &str) -> Result<*mut PageContext, SearchError> {
    let context = PageContext::from_json(documents_json, config::current())?;
    Ok(Box::into_raw(Box::new(context)))
}

pub fn search(query: &str, context: &PageContext) -> Result<*mut SearchResults, SearchError> {
    let results = context.search(query)?;
    let size = results.len();
    Ok(Box::into_raw(Box::new(SearchResults { results, size })))
}

pub fn get_ref(index: usize, results: &SearchResults) -> Result<*mut c_char, SearchError> {
    let result = results
        .results
        .get(index)
        .ok_or_else(|| SearchError("wrong index".to_string()))?;
    into_c_string(result.reference.clone())
}

pub fn render_page(location_search: &str, context: &PageContext) -> Result<*mut c_char, SearchError> {
    let mut view = PageView::new();
    context.run(location_search, &mut view)?;
    into_c_string(view.to_json().to_string())
}

pub fn drop_any<T>(ptr: *mut T) {
    if !ptr.is_null() {
        unsafe { drop(Box::from_raw(ptr)); }
    }
}

pub fn null_on_error<T>(result: Result<*mut T, SearchError>, error_buffer: *mut *mut c_char) -> *mut T {
    match result {
        Ok(value) => value,
        Err(err) => {
            set_error(&err.to_string(), error_buffer);
            ptr::null_mut()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;
    use std::ptr;

    use crate::c_util::{
        assert_pointer, assert_string, create_page_context, drop_any, get_ref, render_page, search,
        set_error,
    };

    const SITE_DATA: &str = r#"[
        {"id": "teams", "title": "Teams", "category": "admin", "url": "/docs/teams/", "content": "Manage teams."},
        {"id": "users", "title": "Users", "category": "admin", "url": "/docs/users/", "content": "Manage users."}
    ]"#;

    fn take_c_string(ptr: *mut c_char) -> String {
        let value = unsafe { CString::from_raw(ptr) };
        value.into_string().unwrap()
    }

    #[test]
    fn null_pointers_are_errors() {
        assert!(assert_string(ptr::null()).is_err());
        assert!(assert_pointer::<u8>(ptr::null_mut()).is_err());
    }

    #[test]
    fn error_buffer_receives_message() {
        let mut buffer: *mut c_char = ptr::null_mut();
        set_error("boom", &mut buffer);
        assert_eq!(take_c_string(buffer), "boom");

        set_error("ignored", ptr::null_mut());
    }

    #[test]
    fn reads_c_strings() {
        let value = CString::new("spring").unwrap();
        assert_eq!(assert_string(value.as_ptr()).unwrap(), "spring");
    }

    #[test]
    fn context_search_and_render() {
        let context_ptr = create_page_context(SITE_DATA).unwrap();
        let context = assert_pointer(context_ptr).unwrap();

        let results_ptr = search("users", context).unwrap();
        let results = assert_pointer(results_ptr).unwrap();
        assert_eq!(results.size, 1);
        assert_eq!(take_c_string(get_ref(0, results).unwrap()), "users");
        assert!(get_ref(1, results).is_err());
        drop_any(results_ptr);

        let json_ptr = render_page("?q=teams", context).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(unsafe { CStr::from_ptr(json_ptr) }.to_str().unwrap()).unwrap();
        drop(unsafe { CString::from_raw(json_ptr) });
        assert_eq!(json["status"], "Showing");
        assert_eq!(json["search_input"], "teams");
        assert!(json["results_html"].as_str().unwrap().contains("<strong>Teams</strong>"));

        drop_any(context_ptr);
    }

    #[test]
    fn bad_site_data() {
        assert!(create_page_context("{").is_err());
    }
}
