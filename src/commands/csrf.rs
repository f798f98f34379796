//! CSRF Token
//!
//! Reads the anti-forgery token the server sets as a cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Look up `name` in a `document.cookie` string, percent-decoded
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| percent_decode_str(value).decode_utf8_lossy().into_owned())
        })
        .filter(|value| !value.is_empty())
}

/// Token from the live document's cookies
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = dom_bind::document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, cookie_name)
}
