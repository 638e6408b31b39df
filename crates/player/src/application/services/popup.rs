//! Marker popup content

use microaventure_domain::Adventure;

/// HTML summary shown when a marker is opened.
///
/// Every field coming from the search backend is escaped.
pub fn popup_html(adventure: &Adventure) -> String {
    format!(
        concat!(
            "<div class=\"adventure-popup\">",
            "<h3>{title}</h3>",
            "<p>{description}</p>",
            "<p><strong>Difficulté :</strong> {difficulty}</p>",
            "<p><strong>Durée :</strong> {duration}</p>",
            "<p><strong>Distance :</strong> {distance}</p>",
            "</div>"
        ),
        title = escape_html(adventure.title()),
        description = escape_html(adventure.description()),
        difficulty = escape_html(adventure.difficulty().label()),
        duration = escape_html(adventure.duration().label()),
        distance = adventure.distance(),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use microaventure_domain::catalog::sample_adventures;
    use microaventure_domain::{AdventureDuration, Difficulty, GeoPoint, Kilometers};

    #[test]
    fn summarizes_all_fields() {
        let lake = sample_adventures().remove(1);
        let html = popup_html(&lake);

        assert!(html.contains("<h3>Circuit du Lac</h3>"));
        assert!(html.contains("Une promenade facile autour du lac"));
        assert!(html.contains("Facile"));
        assert!(html.contains("1-2h"));
        assert!(html.contains("4.2 km"));
    }

    #[test]
    fn escapes_markup_from_backend() {
        let adventure = Adventure::new(
            "x",
            "<script>alert('x')</script>",
            "Lacs & \"cascades\"",
            Difficulty::from("<b>"),
            AdventureDuration::OneToTwoHours,
            Kilometers::new(1.0).unwrap(),
            GeoPoint::new(0.0, 0.0),
        );
        let html = popup_html(&adventure);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Lacs &amp; &quot;cascades&quot;"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
