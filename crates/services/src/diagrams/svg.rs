//! Hand-drawn SVG figures: a few procedural statics diagrams and placeholders.

const ARROW_DEFS: &str = r#"<defs><marker id="head" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="context-stroke"/></marker></defs>"#;

/// Procedural drawing for the few problems that have one.
#[must_use]
pub fn procedural(problem_id: &str) -> Option<String> {
    match problem_id {
        "S_1.1_1" => Some(concurrent_forces()),
        "S_1.1_2" => Some(disc_on_incline()),
        _ => None,
    }
}

/// Particle held by two cables (one at 45°) under its weight.
fn concurrent_forces() -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 400" width="400" height="400">{ARROW_DEFS}
<circle cx="200" cy="200" r="8" fill="black"/>
<line x1="200" y1="200" x2="50" y2="200" stroke="blue" stroke-width="2" marker-end="url(#head)"/>
<line x1="200" y1="200" x2="320" y2="80" stroke="green" stroke-width="2" marker-end="url(#head)"/>
<line x1="200" y1="200" x2="200" y2="350" stroke="red" stroke-width="2" marker-end="url(#head)"/>
<text x="60" y="185" fill="blue" font-style="italic">T_A</text>
<text x="300" y="70" fill="green" font-style="italic">T_B (45°)</text>
<text x="210" y="340" fill="red" font-style="italic">W</text>
</svg>"##
    )
}

/// Disc resting on a 30° incline.
fn disc_on_incline() -> String {
    // tan(30°) * 2 units at 100 px per unit, origin at (200, 200).
    let rise = 2.0_f64 * 30.0_f64.to_radians().tan() * 100.0;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300" width="400" height="300">
<line x1="0" y1="{y1:.1}" x2="400" y2="{y2:.1}" stroke="black" stroke-width="4"/>
<circle cx="200" cy="150" r="50" fill="gray" fill-opacity="0.5"/>
</svg>"##,
        y1 = 200.0 + rise,
        y2 = 200.0 - rise,
    )
}

/// Shown whenever no drawing or image exists for a problem.
#[must_use]
pub fn not_found(problem_id: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300" width="400" height="300">
<text x="200" y="140" fill="red" text-anchor="middle">Diagram Not Found</text>
<text x="200" y="165" fill="red" text-anchor="middle">ID: {id}</text>
</svg>"#,
        id = escape(problem_id)
    )
}

/// Axes with a title; the backdrop of a lecture conversation.
#[must_use]
pub fn lecture_axes(title: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 500" width="500" height="500">
<text x="250" y="30" text-anchor="middle" font-size="18">Visualizing: {title}</text>
<line x1="20" y1="260" x2="480" y2="260" stroke="black"/>
<line x1="250" y1="50" x2="250" y2="480" stroke="black"/>
</svg>"#,
        title = escape(title)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_escapes_the_id() {
        let svg = not_found("a<b&c");
        assert!(svg.contains("ID: a&lt;b&amp;c"));
        assert!(svg.contains("Diagram Not Found"));
    }

    #[test]
    fn only_known_ids_have_procedural_drawings() {
        assert!(procedural("S_1.1_1").unwrap().contains("T_B (45°)"));
        assert!(procedural("S_1.1_2").unwrap().contains("<circle"));
        assert!(procedural("S_1.1_3").is_none());
    }

    #[test]
    fn lecture_axes_carry_the_topic() {
        assert!(lecture_axes("Normal & Tangent").contains("Visualizing: Normal &amp; Tangent"));
    }
}
