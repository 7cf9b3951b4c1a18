use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical slices of the study screen, top to bottom: status bar, the
/// optional review alert, the goal/progress strip, the sentence card, and
/// the footer hints.
pub struct StudyLayout {
    pub header: Rect,
    pub alert: Option<Rect>,
    pub progress: Rect,
    pub card: Rect,
    pub footer: Rect,
}

impl StudyLayout {
    pub fn new(area: Rect, show_alert: bool) -> Self {
        let mut constraints = vec![Constraint::Length(3)];
        if show_alert {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(4));
        constraints.push(Constraint::Min(10));
        constraints.push(Constraint::Length(1));

        let slices = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        if show_alert {
            Self {
                header: slices[0],
                alert: Some(slices[1]),
                progress: slices[2],
                card: slices[3],
                footer: slices[4],
            }
        } else {
            Self {
                header: slices[0],
                alert: None,
                progress: slices[1],
                card: slices[2],
                footer: slices[3],
            }
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 36;
    const MIN_POPUP_HEIGHT: u16 = 9;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
