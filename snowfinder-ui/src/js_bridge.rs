//! Small JS interop helpers via `js_sys::eval()`.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SnowFinder JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Smoothly scroll an element to the top of the viewport.
///
/// The element is usually rendered by the same state change that triggers the
/// scroll, so this polls until it exists (giving up after about two seconds).
pub fn scroll_into_view(element_id: &str) {
    let id = serde_json::to_string(element_id).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                var el = document.getElementById({id});
                attempts++;
                if (el) {{
                    clearInterval(poll);
                    el.scrollIntoView({{ behavior: 'smooth', block: 'start' }});
                }} else if (attempts > 40) {{
                    clearInterval(poll);
                }}
            }}, 50);
        }})();
        "#,
    ));
}
