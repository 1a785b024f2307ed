//! Naming of the generated tab widget.

/// Class and id naming for TabGroups.
///
/// Class names follow the BEM convention of the widget toolkit: the block
/// class is `class_prefix`, element classes are `{class_prefix}__{element}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsOptions {
    /// Block class of the TabGroup container.
    pub class_prefix: String,
    /// Prefix of panel ids: a Tab `t1` gets panel `{prefix}t1` and body
    /// `{prefix}t1-content`.
    pub panel_id_prefix: String,
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self {
            class_prefix: "glue-tabs".to_owned(),
            panel_id_prefix: "tab-".to_owned(),
        }
    }
}

impl TabsOptions {
    /// Class of the TabGroup root container.
    #[must_use]
    pub fn container_class(&self) -> &str {
        &self.class_prefix
    }

    /// Class of a widget element, e.g. `element_class("tablist")`.
    #[must_use]
    pub fn element_class(&self, element: &str) -> String {
        format!("{}__{element}", self.class_prefix)
    }

    #[must_use]
    pub fn panel_id(&self, tab_id: &str) -> String {
        format!("{}{tab_id}", self.panel_id_prefix)
    }

    #[must_use]
    pub fn panel_body_id(&self, tab_id: &str) -> String {
        format!("{}{tab_id}-content", self.panel_id_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let options = TabsOptions::default();
        assert_eq!(options.container_class(), "glue-tabs");
        assert_eq!(options.element_class("panel-body"), "glue-tabs__panel-body");
        assert_eq!(options.panel_id("t1"), "tab-t1");
        assert_eq!(options.panel_body_id("t1"), "tab-t1-content");
    }

    #[test]
    fn test_custom_prefixes() {
        let options = TabsOptions {
            class_prefix: "docs-tabs".to_owned(),
            panel_id_prefix: "panel-".to_owned(),
        };
        assert_eq!(options.element_class("tab"), "docs-tabs__tab");
        assert_eq!(options.panel_body_id("x"), "panel-x-content");
    }
}
