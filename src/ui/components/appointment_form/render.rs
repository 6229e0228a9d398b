use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use super::{AppointmentForm, FormFocus};
use crate::booking::{FieldKind, FormField};
use crate::ui::layout::TWO_COLUMN_MIN_WIDTH;
use crate::ui::styles::Styles;
use crate::ui::theme::ThemeProvider;

pub const SUBMIT_LABEL: &str = "Randevu Oluştur";
const NOTES_LINES: u16 = 4;

/// Field grid used on wide terminals
const GRID: &[&[FormField]] = &[
    &[FormField::CustomerName, FormField::Phone],
    &[FormField::Email],
    &[FormField::CarModel, FormField::EngineName],
    &[FormField::ModelYear, FormField::Transmission],
    &[FormField::ServiceType],
    &[FormField::HasLpg],
    &[FormField::AppointmentDate, FormField::AppointmentTime],
    &[FormField::Notes],
];

/// One visual row of the form
#[derive(Debug, Clone, PartialEq)]
enum FormRow {
    Fields(Vec<FormField>),
    Submit,
}

impl FormRow {
    fn height(&self) -> u16 {
        match self {
            // Tallest field plus a spacer line
            FormRow::Fields(fields) => {
                fields.iter().map(|f| field_height(*f)).max().unwrap_or(0) + 1
            }
            FormRow::Submit => 1,
        }
    }

    fn contains(&self, focus: FormFocus) -> bool {
        match (self, focus) {
            (FormRow::Fields(fields), FormFocus::Field(field)) => fields.contains(&field),
            (FormRow::Submit, FormFocus::Submit) => true,
            _ => false,
        }
    }
}

fn field_height(field: FormField) -> u16 {
    match field.kind() {
        FieldKind::MultiLineText => 1 + NOTES_LINES,
        _ => 2,
    }
}

fn rows(two_column: bool) -> Vec<FormRow> {
    let mut rows: Vec<FormRow> = if two_column {
        GRID.iter().map(|r| FormRow::Fields(r.to_vec())).collect()
    } else {
        FormField::ALL
            .iter()
            .map(|f| FormRow::Fields(vec![*f]))
            .collect()
    };
    rows.push(FormRow::Submit);
    rows
}

/// Index of the first row to draw so the focused row fits in `height`
fn first_visible_row(rows: &[FormRow], focus: FormFocus, height: u16) -> usize {
    let focused = rows.iter().position(|r| r.contains(focus)).unwrap_or(0);
    let mut start = 0;
    let mut used: u16 = rows[..=focused].iter().map(|r| r.height()).sum();
    while used > height && start < focused {
        used -= rows[start].height();
        start += 1;
    }
    start
}

impl AppointmentForm {
    /// Draw the form panel; `active` is false while a dialog covers it
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &ThemeProvider, active: bool) {
        let styles = theme.styles();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border)
            .title(Span::styled(" Randevu Bilgileri ", styles.title))
            .padding(Padding::horizontal(1))
            .style(styles.surface);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = rows(area.width >= TWO_COLUMN_MIN_WIDTH);
        let start = first_visible_row(&rows, self.focus, inner.height);

        let mut y = inner.y;
        for row in &rows[start..] {
            let height = row.height();
            if y + height > inner.bottom() {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, height);
            match row {
                FormRow::Fields(fields) => self.render_row(frame, row_area, styles, fields, active),
                FormRow::Submit => self.render_submit(frame, row_area, styles),
            }
            y += height;
        }
    }

    fn render_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        fields: &[FormField],
        active: bool,
    ) {
        let columns: Vec<Rect> = if fields.len() > 1 {
            Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .split(area)
            .iter()
            .step_by(2)
            .copied()
            .collect()
        } else {
            vec![area]
        };

        for (field, column) in fields.iter().zip(columns) {
            let field_area = Rect::new(column.x, column.y, column.width, field_height(*field));
            self.render_field(frame, field_area, styles, *field, active);
        }
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        field: FormField,
        active: bool,
    ) {
        let focused = self.focus == FormFocus::Field(field);
        let label_style = if focused {
            styles.label_focused
        } else {
            styles.label
        };

        if field.kind() == FieldKind::Checkbox {
            let mark = if self.record.has_lpg { "[x]" } else { "[ ]" };
            let lines = vec![
                Line::from(vec![
                    Span::styled(mark, label_style),
                    Span::styled(" ", styles.surface),
                    Span::styled(field.label(), label_style),
                ]),
                Line::from(Span::styled(
                    format!("    {}", field.placeholder()),
                    styles.muted_text,
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        let mut label = vec![Span::styled(field.label(), label_style)];
        if field.is_required() {
            label.push(Span::styled(" *", label_style));
        }
        if field == FormField::AppointmentDate {
            label.push(Span::styled(
                format!("  (en erken {})", self.today.format("%Y-%m-%d")),
                styles.muted_text,
            ));
        }
        let label_area = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(label)), label_area);

        let input_area = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1),
        );
        let input_style = if focused {
            styles.input_focused
        } else {
            styles.input
        };

        match field.kind() {
            FieldKind::Select => {
                let value = self.select_value(field);
                let (text, style) = match &value {
                    Some(v) => (v.clone(), input_style),
                    None => (field.placeholder().to_string(), styles.placeholder),
                };
                let content = if focused {
                    format!("◂ {} ▸", text)
                } else {
                    format!("  {}", text)
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(content, style))).style(styles.input),
                    input_area,
                );
            }
            FieldKind::MultiLineText => {
                let text = self.record.text(field).unwrap_or_default();
                self.render_multiline(frame, input_area, styles, field, text, focused && active);
            }
            _ => {
                let text = if field.kind() == FieldKind::Date {
                    self.date_input.as_str()
                } else {
                    self.record.text(field).unwrap_or_default()
                };
                self.render_single_line(frame, input_area, styles, field, text, focused, active);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_single_line(
        &self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        field: FormField,
        text: &str,
        focused: bool,
        active: bool,
    ) {
        if text.is_empty() && !focused {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                field.placeholder(),
                styles.placeholder,
            )))
            .style(styles.input);
            frame.render_widget(placeholder, area);
            return;
        }

        // Scroll horizontally so the cursor stays visible
        let width = area.width.max(1) as usize;
        let cursor = if focused { self.cursor } else { 0 };
        let offset = (cursor + 1).saturating_sub(width);
        let visible: String = text.chars().skip(offset).take(width).collect();
        let style = if focused {
            styles.input_focused
        } else {
            styles.input
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(visible, style))).style(styles.input),
            area,
        );

        if focused && active {
            let before: String = text.chars().skip(offset).take(cursor - offset).collect();
            let x = area.x + Span::raw(before).width() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }

    fn render_multiline(
        &self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        field: FormField,
        text: &str,
        show_cursor: bool,
    ) {
        if text.is_empty() && !show_cursor {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                field.placeholder(),
                styles.placeholder,
            )))
            .style(styles.input);
            frame.render_widget(placeholder, area);
            return;
        }

        let before: String = text.chars().take(self.cursor).collect();
        let cursor_line = before.matches('\n').count();
        let cursor_col = before.rsplit('\n').next().unwrap_or_default();

        let height = area.height.max(1) as usize;
        let first_line = if show_cursor {
            (cursor_line + 1).saturating_sub(height)
        } else {
            0
        };
        let lines: Vec<Line> = text
            .split('\n')
            .skip(first_line)
            .take(height)
            .map(|l| Line::from(Span::styled(l.to_string(), styles.input)))
            .collect();
        frame.render_widget(Paragraph::new(lines).style(styles.input), area);

        if show_cursor {
            let x = area.x + Span::raw(cursor_col).width() as u16;
            let y = area.y + (cursor_line - first_line) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), y));
        }
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let style = if self.focus == FormFocus::Submit {
            styles.button_focused
        } else {
            styles.button
        };
        let label = format!("{:^width$}", SUBMIT_LABEL, width = area.width as usize);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), area);
    }

    /// Display text of a selection, `None` while the placeholder is selected
    fn select_value(&self, field: FormField) -> Option<String> {
        match field {
            FormField::ModelYear => self.record.model_year.map(|y| y.to_string()),
            FormField::Transmission => self.record.transmission.map(|t| t.label().to_string()),
            FormField::AppointmentTime => self.record.appointment_time.map(|t| t.to_string()),
            _ => None,
        }
    }
}
