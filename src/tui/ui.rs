use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::core::focus::FocusTarget;
use crate::core::state::Wizard;
use crate::tui::component::Component;
use crate::tui::components::{ComponentList, HelpBar};
use crate::tui::form::FormState;
use crate::tui::keymap::KeyMap;

/// Rows taken by a bordered single-line input.
const INPUT_HEIGHT: u16 = 3;
const INPUT_GAP: u16 = 2;

/// Where each region of the form goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub project_name: Rect,
    pub team_name: Rect,
    pub list: Rect,
    pub help: Rect,
}

/// Split the terminal area into the form regions.
///
/// Shared by `draw_ui` and `FormState::resize`, so the list page size
/// computed on resize matches what the next frame draws.
pub fn form_layout(area: Rect, form: &FormState) -> FormLayout {
    let area = area.inner(Margin::new(2, 1));

    let [inputs_area, list, help] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [project_name, _, team_name] = Layout::horizontal([
        Constraint::Length(form.project_name_input.outer_width()),
        Constraint::Length(INPUT_GAP),
        Constraint::Length(form.team_name_input.outer_width()),
    ])
    .areas(inputs_area);

    FormLayout {
        project_name,
        team_name,
        list,
        help,
    }
}

/// Draw the whole wizard form.
///
/// ```text
/// ╭ Project name ──╮  ╭ Team name ─────╮
/// │ > Foo          │  │ > Bar          │
/// ╰────────────────╯  ╰────────────────╯
/// ╭ Choose components ──────────────────╮
/// │ CLI added                           │
/// │ │ CLI                               │
/// │ │ [X]                               │
/// ╰─────────────────────────────────────╯
/// tab next • shift+tab prev • ...
/// ```
///
/// Reads the wizard only; widget state in `form` may update render caches.
pub fn draw_ui(frame: &mut Frame, wizard: &Wizard, form: &mut FormState, keymap: &KeyMap) {
    let layout = form_layout(frame.area(), form);
    let focus = wizard.focus.current();

    form.project_name_input.render(frame, layout.project_name);
    form.team_name_input.render(frame, layout.team_name);

    ComponentList::new(
        &mut form.component_list,
        wizard.playground.chosen_components(),
        focus == FocusTarget::ComponentList,
        wizard.status.as_ref(),
    )
    .render(frame, layout.list);

    HelpBar::new(keymap, focus).render(frame, layout.help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::component::Component as Choice;
    use crate::test_support::test_form;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(wizard: &Wizard, form: &mut FormState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let keymap = KeyMap::default();
        terminal
            .draw(|f| draw_ui(f, wizard, form, &keymap))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_initial_form() {
        let wizard = Wizard::new();
        let mut form = test_form();
        let text = render(&wizard, &mut form, 100, 30);

        assert!(text.contains("Project name"));
        assert!(text.contains("Team name"));
        assert!(text.contains("Choose components"));
        assert!(text.contains("0 of 7 chosen"));
        assert!(text.contains("NATSProducer"));
        assert!(text.contains("ctrl+c quit"));
    }

    #[test]
    fn test_draw_ui_shows_status_and_marker() {
        let mut wizard = Wizard::new();
        update(&mut wizard, Action::Retreat);
        update(&mut wizard, Action::Toggle(Choice::Cli));
        let mut form = test_form();
        form.sync_focus(wizard.focus.current());

        let text = render(&wizard, &mut form, 100, 30);
        assert!(text.contains("CLI added"));
        assert!(text.contains("[X]"));
        assert!(text.contains("space toggle"));
    }

    #[test]
    fn test_draw_ui_does_not_touch_wizard() {
        let mut wizard = Wizard::new();
        wizard.playground.project_name = "Foo".to_string();
        let before = wizard.playground.clone();
        let mut form = test_form();
        render(&wizard, &mut form, 100, 30);
        assert_eq!(wizard.playground, before);
        assert_eq!(wizard.focus.current(), FocusTarget::ProjectName);
    }

    #[test]
    fn test_layout_places_inputs_side_by_side() {
        let form = test_form();
        let layout = form_layout(Rect::new(0, 0, 100, 30), &form);
        assert_eq!(layout.project_name.y, layout.team_name.y);
        assert!(layout.team_name.x >= layout.project_name.right());
        assert_eq!(layout.list.y, layout.project_name.bottom());
        assert_eq!(layout.help.bottom(), 29);
        assert_eq!(layout.list.height, 24);
    }

    #[test]
    fn test_draw_ui_survives_tiny_terminal() {
        let wizard = Wizard::new();
        let mut form = test_form();
        render(&wizard, &mut form, 10, 4);
        assert_eq!(form.component_list.page_size(), 1);
    }
}
