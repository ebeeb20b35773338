pub const TRAP_ELEMENT_ID: &str = "bot-trap";

// invisible to humans, followable by agents that walk the DOM
pub fn render_trap_element() -> String {
    format!(
        concat!(
            "<a id=\"{id}\" href=\"/trap\" tabindex=\"-1\" aria-hidden=\"true\" ",
            "style=\"position:absolute;left:-9999px;width:1px;height:1px;overflow:hidden\"></a>"
        ),
        id = TRAP_ELEMENT_ID
    )
}

pub fn inject_trap(html: &str) -> String {
    let element = render_trap_element();

    if let Some(pos) = html.find("</body>") {
        let mut result = String::with_capacity(html.len() + element.len());
        result.push_str(&html[..pos]);
        result.push_str(&element);
        result.push_str(&html[pos..]);
        result
    } else {
        format!("{}{}", html, element)
    }
}

pub fn document_has_trap(html: &str) -> bool {
    html.contains(&format!("id=\"{}\"", TRAP_ELEMENT_ID))
        || html.contains(&format!("id='{}'", TRAP_ELEMENT_ID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trap_lands_before_body_close() {
        let page = "<html><body><p>content</p></body></html>";
        let injected = inject_trap(page);
        let trap_pos = injected.find(TRAP_ELEMENT_ID).expect("trap present");
        let body_pos = injected.find("</body>").expect("body close kept");
        assert!(trap_pos < body_pos);
    }

    #[test]
    fn fragment_without_body_gets_appended() {
        let injected = inject_trap("<p>fragment</p>");
        assert!(injected.starts_with("<p>fragment</p><a id=\"bot-trap\""));
    }

    #[test]
    fn presence_probe_sees_both_quote_styles() {
        assert!(document_has_trap("<a id=\"bot-trap\"></a>"));
        assert!(document_has_trap("<a id='bot-trap'></a>"));
        assert!(!document_has_trap("<a id=\"nav-home\"></a>"));
    }
}
