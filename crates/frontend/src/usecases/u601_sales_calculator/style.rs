//! Inline styles of the form controls, selected from hover/enabled flags

const SELECT_BASE: &str = "flex: 1; height: 48px; border-radius: 8px; background-color: #fff; padding: 10px; color: #333; font-size: 16px; border: 1px solid #ddd; transition: box-shadow 0.3s ease;";
const CALCULATE_BASE: &str = "color: #fff; height: 48px; padding: 0 24px; font-size: 16px; border: none; border-radius: 8px; min-width: 120px; transition: background-color 0.3s ease;";
const DOWNLOAD_BASE: &str = "color: #000; border: 1px solid #000; padding: 10px; font-size: 16px; border-radius: 8px; width: 100%; transition: background-color 0.3s ease;";

pub fn select_style(hovered: bool) -> String {
    let shadow = if hovered {
        "0 2px 4px rgba(0, 0, 0, 0.2)"
    } else {
        "0 1px 2px rgba(0, 0, 0, 0.1)"
    };
    format!("{} box-shadow: {};", SELECT_BASE, shadow)
}

pub fn calculate_button_style(enabled: bool, hovered: bool) -> String {
    let (background, cursor) = match (enabled, hovered) {
        (false, _) => ("#ccc", "not-allowed"),
        (true, true) => ("#222", "pointer"),
        (true, false) => ("#000", "pointer"),
    };
    format!(
        "{} background-color: {}; cursor: {};",
        CALCULATE_BASE, background, cursor
    )
}

pub fn download_button_style(hovered: bool) -> String {
    let background = if hovered { "#f4f4f4" } else { "#fff" };
    format!("{} background-color: {}; cursor: pointer;", DOWNLOAD_BASE, background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_button_disabled_ignores_hover() {
        assert_eq!(
            calculate_button_style(false, true),
            calculate_button_style(false, false)
        );
        assert!(calculate_button_style(false, true).contains("background-color: #ccc"));
    }

    #[test]
    fn test_calculate_button_hover() {
        assert!(calculate_button_style(true, false).contains("background-color: #000"));
        assert!(calculate_button_style(true, true).contains("background-color: #222"));
    }

    #[test]
    fn test_select_and_download_hover() {
        assert!(select_style(true).contains("rgba(0, 0, 0, 0.2)"));
        assert!(select_style(false).contains("rgba(0, 0, 0, 0.1)"));
        assert!(download_button_style(true).contains("#f4f4f4"));
        assert!(download_button_style(false).ends_with("background-color: #fff; cursor: pointer;"));
    }
}
