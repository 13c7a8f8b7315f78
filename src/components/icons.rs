use yew::prelude::*;

/// Font Awesome glyphs used on the feature cards. The stylesheet is loaded
/// by `index.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureGlyph {
    ChartLine,
    Gamepad,
    Robot,
    Trophy,
}

impl FeatureGlyph {
    pub fn class_name(self) -> &'static str {
        match self {
            FeatureGlyph::ChartLine => "fa-chart-line",
            FeatureGlyph::Gamepad => "fa-gamepad",
            FeatureGlyph::Robot => "fa-robot",
            FeatureGlyph::Trophy => "fa-trophy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureGlyph::ChartLine => "chart",
            FeatureGlyph::Gamepad => "game controller",
            FeatureGlyph::Robot => "robot",
            FeatureGlyph::Trophy => "trophy",
        }
    }

    pub fn render(self) -> Html {
        html! {
            <i class={classes!("fas", self.class_name())} role="img" aria-label={self.label()}></i>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_map_to_distinct_font_awesome_classes() {
        let glyphs = [FeatureGlyph::ChartLine, FeatureGlyph::Gamepad, FeatureGlyph::Robot, FeatureGlyph::Trophy];
        let mut classes: Vec<_> = glyphs.iter().map(|g| g.class_name()).collect();
        assert!(classes.iter().all(|c| c.starts_with("fa-")));
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }
}
