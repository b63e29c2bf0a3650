use anyhow::{Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Customer, Restaurant, MAX_FEEDBACK_LEN};

/// Input state of the "add review" dialog. Customer and restaurant are picked
/// from the loaded lists by index; rating and feedback are free text until
/// the form is submitted.
#[derive(Default, Clone)]
pub(crate) struct ReviewForm {
    pub(crate) customer: usize,
    pub(crate) restaurant: usize,
    pub(crate) rating: String,
    pub(crate) feedback: String,
    pub(crate) active: ReviewField,
    pub(crate) error: Option<String>,
}

/// Fields of the review form, in tab order.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub(crate) enum ReviewField {
    Customer,
    Restaurant,
    #[default]
    Rating,
    Feedback,
}

impl ReviewForm {
    /// Start a form for the given list positions with the rating focused.
    pub(crate) fn for_pair(customer: usize, restaurant: usize) -> Self {
        Self {
            customer,
            restaurant,
            ..Self::default()
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            ReviewField::Customer => ReviewField::Restaurant,
            ReviewField::Restaurant => ReviewField::Rating,
            ReviewField::Rating => ReviewField::Feedback,
            ReviewField::Feedback => ReviewField::Customer,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            ReviewField::Customer => ReviewField::Feedback,
            ReviewField::Restaurant => ReviewField::Customer,
            ReviewField::Rating => ReviewField::Restaurant,
            ReviewField::Feedback => ReviewField::Rating,
        };
    }

    /// Step the customer or restaurant choice, wrapping around `len`. Does
    /// nothing while a text field is focused.
    pub(crate) fn cycle_choice(&mut self, offset: isize, len: usize) {
        if len == 0 {
            return;
        }
        let slot = match self.active {
            ReviewField::Customer => &mut self.customer,
            ReviewField::Restaurant => &mut self.restaurant,
            ReviewField::Rating | ReviewField::Feedback => return,
        };
        *slot = (*slot as isize + offset).rem_euclid(len as isize) as usize;
    }

    /// Append a character to the focused text field. Ratings take digits
    /// only; feedback stops accepting input at the length limit.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            ReviewField::Rating => {
                if ch.is_ascii_digit() {
                    self.rating.push(ch);
                    true
                } else {
                    false
                }
            }
            ReviewField::Feedback => {
                if !ch.is_control() && self.feedback.chars().count() < MAX_FEEDBACK_LEN {
                    self.feedback.push(ch);
                    true
                } else {
                    false
                }
            }
            ReviewField::Customer | ReviewField::Restaurant => false,
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            ReviewField::Rating => {
                self.rating.pop();
            }
            ReviewField::Feedback => {
                self.feedback.pop();
            }
            ReviewField::Customer | ReviewField::Restaurant => {}
        }
    }

    /// Convert the text fields. An empty rating comes back as `None` and is
    /// rejected by the review validation with the same message the library
    /// gives every other caller.
    pub(crate) fn parse_inputs(&self) -> Result<(Option<i64>, String)> {
        let rating_raw = self.rating.trim();
        let rating = if rating_raw.is_empty() {
            None
        } else {
            Some(
                rating_raw
                    .parse::<i64>()
                    .context("Star rating must be a whole number.")?,
            )
        };
        Ok((rating, self.feedback.trim().to_string()))
    }

    /// Render a choice field as `Label: < value >`.
    pub(crate) fn choice_line(
        &self,
        field_name: &str,
        field: ReviewField,
        value: &str,
    ) -> Line<'static> {
        let style = if self.active == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(format!("< {value} >"), style),
        ])
    }

    /// Render a text field, showing a placeholder while it is empty.
    pub(crate) fn build_line(&self, field_name: &str, field: ReviewField) -> Line<'static> {
        let value = match field {
            ReviewField::Rating => &self.rating,
            ReviewField::Feedback => &self.feedback,
            ReviewField::Customer | ReviewField::Restaurant => return Line::from(""),
        };
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: ReviewField) -> usize {
        match field {
            ReviewField::Rating => self.rating.chars().count(),
            ReviewField::Feedback => self.feedback.chars().count(),
            ReviewField::Customer | ReviewField::Restaurant => 0,
        }
    }
}

/// Pending "delete reviews" confirmation.
#[derive(Clone)]
pub(crate) struct ConfirmReviewDelete {
    pub(crate) customer: Customer,
    pub(crate) restaurant: Restaurant,
    pub(crate) count: usize,
}
