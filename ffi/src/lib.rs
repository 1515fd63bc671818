//! C-ABI wrapper around `todo-core`.
//!
//! # Overview
//! Exposes the todo API's request building, response parsing and field
//! validation through `extern "C"` functions so any language with a C FFI
//! can drive the backend without linking to Rust's async runtime or serde.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors `TodoApi` 1:1.
//! - Builders for create and update apply the form's field checks and
//!   return null when they fail, so no invalid body is ever produced.
//! - A single `FfiTodoResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `todo_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use todo_core::http::HttpResponse;
use todo_core::validate::{check_field, Field};
use todo_core::{ApiError, TodoApi, TodoId, TodoInput};

use types::*;

/// Borrow a C string as UTF-8. Null or invalid UTF-8 yields `None`.
fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Read title/description and apply the submit checks.
fn read_input(title: *const c_char, description: *const c_char) -> Option<TodoInput> {
    let input = TodoInput::new(read_str(title)?, read_str(description)?);
    input.validate().ok()?;
    Some(input)
}

fn read_id(id: *const c_char) -> Option<TodoId> {
    read_str(id).filter(|s| !s.is_empty()).map(TodoId::new)
}

// ---------------------------------------------------------------------------
// Handle lifecycle
// ---------------------------------------------------------------------------

/// Create a new `TodoApi` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `todo_api_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_api_new(base_url: *const c_char) -> *mut FfiTodoApi {
    catch_unwind(|| {
        let Some(url) = read_str(base_url) else {
            return std::ptr::null_mut();
        };
        Box::into_raw(Box::new(FfiTodoApi {
            inner: TodoApi::new(url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a handle created by `todo_api_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_api_free(api: *mut FfiTodoApi) {
    if !api.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(api) });
        });
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check one form field (title or description) against the submit rules:
/// non-empty and at most 50 characters.
#[unsafe(no_mangle)]
pub extern "C" fn todo_validate_field(text: *const c_char) -> FfiValidation {
    catch_unwind(|| match read_str(text) {
        Some(s) => FfiValidation::from(check_field(Field::Title, s)),
        None => FfiValidation::NullArg,
    })
    .unwrap_or(FfiValidation::NullArg)
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing all todos.
///
/// Returns null if `api` is null.
/// The caller must free the returned pointer with `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_build_list_todos(api: *const FfiTodoApi) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let api = unsafe { &*api };
        FfiHttpRequest::from_core(api.inner.build_list_todos())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating a new todo.
///
/// Returns null if any argument is null or if a field fails validation.
#[unsafe(no_mangle)]
pub extern "C" fn todo_build_create_todo(
    api: *const FfiTodoApi,
    title: *const c_char,
    description: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let api = unsafe { &*api };
        let Some(input) = read_input(title, description) else {
            return std::ptr::null_mut();
        };
        match api.inner.build_create_todo(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request replacing the title and description of `id`.
///
/// Returns null if any argument is null, `id` is empty, or a field fails
/// validation.
#[unsafe(no_mangle)]
pub extern "C" fn todo_build_update_todo(
    api: *const FfiTodoApi,
    id: *const c_char,
    title: *const c_char,
    description: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let api = unsafe { &*api };
        let (Some(id), Some(input)) = (read_id(id), read_input(title, description)) else {
            return std::ptr::null_mut();
        };
        match api.inner.build_update_todo(&id, &input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting a todo by id.
///
/// Returns null if `api` or `id` is null, or if `id` is empty.
#[unsafe(no_mangle)]
pub extern "C" fn todo_build_delete_todo(
    api: *const FfiTodoApi,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let api = unsafe { &*api };
        let Some(id) = read_id(id) else {
            return std::ptr::null_mut();
        };
        FfiHttpRequest::from_core(api.inner.build_delete_todo(&id))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null or
/// non-UTF-8 body is read as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body: read_str(resp.body).unwrap_or("").to_string(),
    }
}

/// Shared null checks and error mapping for every `todo_parse_*` function.
fn parse_with(
    api: *const FfiTodoApi,
    response: *const FfiHttpResponse,
    parse: impl FnOnce(&TodoApi, HttpResponse) -> Result<*mut FfiTodoResult, ApiError>,
) -> *mut FfiTodoResult {
    if api.is_null() {
        return FfiTodoResult::null_arg("api");
    }
    if response.is_null() {
        return FfiTodoResult::null_arg("response");
    }
    let api = unsafe { &*api };
    let resp = unsafe { &*response };
    match parse(&api.inner, ffi_response_to_core(resp)) {
        Ok(result) => result,
        Err(e) => FfiTodoResult::from_error(e),
    }
}

/// Parse an HTTP response from a list-todos request.
///
/// Returns a result with `data_tag = TodoList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_list_todos(
    api: *const FfiTodoApi,
    response: *const FfiHttpResponse,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        parse_with(api, response, |api, resp| {
            api.parse_list_todos(resp).map(FfiTodoResult::ok_todo_list)
        })
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_list_todos"))
}

/// Parse an HTTP response from a create-todo request. Any 2xx is success.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_create_todo(
    api: *const FfiTodoApi,
    response: *const FfiHttpResponse,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        parse_with(api, response, |api, resp| {
            api.parse_create_todo(resp).map(|()| FfiTodoResult::ok_empty())
        })
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_create_todo"))
}

/// Parse an HTTP response from an update-todo request. Any 2xx is success.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_update_todo(
    api: *const FfiTodoApi,
    response: *const FfiHttpResponse,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        parse_with(api, response, |api, resp| {
            api.parse_update_todo(resp).map(|()| FfiTodoResult::ok_empty())
        })
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_update_todo"))
}

/// Parse an HTTP response from a delete-todo request. Any 2xx is success.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_delete_todo(
    api: *const FfiTodoApi,
    response: *const FfiHttpResponse,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        parse_with(api, response, |api, resp| {
            api.parse_delete_todo(resp).map(|()| FfiTodoResult::ok_empty())
        })
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_delete_todo"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `todo_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiTodoResult` returned by any `todo_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_result(result: *mut FfiTodoResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::TodoList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiTodoList) };
                if !list.items.is_null() && list.len > 0 {
                    let items = unsafe {
                        Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                            list.items,
                            list.len as usize,
                        ))
                    };
                    for item in items.iter() {
                        free_ffi_todo_fields(item);
                    }
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free the C-string fields of an `FfiTodo` (but not the struct itself).
fn free_ffi_todo_fields(todo: &FfiTodo) {
    free_c_string(todo.id);
    free_c_string(todo.title);
    free_c_string(todo.description);
    free_c_string(todo.created_at);
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
