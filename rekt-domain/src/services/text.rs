use crate::entities::{Incident, IncidentSummary};

/// Drops tags, decodes the common entities and collapses whitespace.
pub fn strip_html(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text summaries for records that carry a description.
pub fn summaries(incidents: &[Incident]) -> Vec<IncidentSummary> {
    incidents
        .iter()
        .filter_map(|incident| {
            let text = strip_html(incident.description.as_deref()?);
            (!text.is_empty()).then(|| IncidentSummary {
                id: incident.id.to_string(),
                project_name: incident.project_name.clone(),
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_entities() {
        let html = "<p>Attacker&nbsp;drained <b>$3M</b> &amp; fled.</p>\n<br/>";
        assert_eq!(strip_html(html), "Attacker drained $3M & fled.");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("  no   markup "), "no markup");
    }
}
