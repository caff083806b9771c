//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The choropleth renderer lives in `assets/js/choropleth-map.js` and is
//! loaded at runtime. It is evaluated as a global (no ES modules) and
//! exposed via `window.*`. This module provides Rust wrappers that pass a
//! serialized [`ChoroplethSpec`](bfci_data::ChoroplethSpec) to it.

// Embed the map JS at compile time
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BFCI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Whether the DOM currently holds an element with this id.
pub fn container_exists(container_id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .is_some()
}

/// Initialize the map script with a wait-for-Plotly polling loop.
///
/// The script defines `renderChoroplethMap(...)` via a `function`
/// declaration. It is evaluated at global scope through an indirect `eval()`
/// once Plotly is ready, then promoted to `window.*`.
pub fn init_maps() {
    let store_js = format!(
        "window.__bfciMapScripts = {};",
        serde_json::to_string(CHOROPLETH_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__bfciMapScripts);
                    delete window.__bfciMapScripts;
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof destroyChoroplethMap !== 'undefined') window.destroyChoroplethMap = destroyChoroplethMap;
                    window.__bfciMapsReady = true;
                    console.log('BFCI maps initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the choropleth map described by `spec_json` into `container_id`.
///
/// Uses a polling loop to wait for Plotly to load, the map script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_choropleth_map(container_id: &str, spec_json: &str) {
    // A JSON string literal is also a valid JS string literal.
    let spec_literal = serde_json::to_string(spec_json).unwrap_or_default();
    log::info!(
        "[BFCI Debug] js_bridge: rendering map into '{}' ({} bytes, container present: {})",
        container_id,
        spec_json.len(),
        container_exists(container_id)
    );
    call_js(&format!(
        r#"
        (function() {{
            var spec = {spec_literal};
            var poll = setInterval(function() {{
                if (window.__bfciMapsReady &&
                    typeof window.renderChoroplethMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderChoroplethMap('{container_id}', spec);
                    }} catch(e) {{ console.error('[BFCI] renderChoroplethMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up the map in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        r#"
        var el = document.getElementById('{0}');
        if (el) {{
            if (typeof window.destroyChoroplethMap !== 'undefined') window.destroyChoroplethMap('{0}');
            el.innerHTML = '';
        }}
        "#,
        container_id
    ));
}
