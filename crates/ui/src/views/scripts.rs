/// Typeset `span.math` nodes emitted by the markdown renderer, once each.
pub(super) const RENDER_MATH_SCRIPT: &str = r#"(function() {
    if (!window.katex) {
        return;
    }
    document.querySelectorAll("span.math:not([data-typeset])").forEach(function (el) {
        const source = el.textContent;
        el.setAttribute("data-typeset", "1");
        try {
            window.katex.render(source, el, {
                displayMode: el.classList.contains("math-display"),
                throwOnError: false,
            });
        } catch (_) {
            el.textContent = source;
        }
    });
})();"#;
