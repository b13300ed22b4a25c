use crate::control::CopyControl;
use crate::ui::view::Element;

pub const DEMO_HEADING: &str = "Example: Copying Code";

pub const SAMPLE_CODE: &str = "function helloWorld() {
  console.log('Hello, World!');
}";

/// Demo screen: a heading and one copy button bound to [`SAMPLE_CODE`].
#[derive(Debug, Clone)]
pub struct DemoHost {
    control: CopyControl,
}

impl DemoHost {
    pub fn new() -> Self {
        Self {
            control: CopyControl::new(SAMPLE_CODE),
        }
    }

    pub fn control(&self) -> &CopyControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut CopyControl {
        &mut self.control
    }

    pub fn render(&self) -> Element {
        Element::Group(vec![Element::heading(DEMO_HEADING), self.control.render()])
    }
}

impl Default for DemoHost {
    fn default() -> Self {
        Self::new()
    }
}
