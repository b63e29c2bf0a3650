use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::database::Database;
use crate::db::Store;
use crate::models::{Customer, Restaurant};

use super::forms::{ConfirmReviewDelete, ReviewField, ReviewForm};
use super::helpers::{centered_rect, star_bar, surface_error};
use super::screens::{CustomerDetail, Cursor, RestaurantDetail};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Share of the width given to the list on the left of each screen.
const LIST_WIDTH_PERCENT: u16 = 35;

/// The two top-level screens, switched with Tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Screen {
    Restaurants,
    Customers,
}

/// Modal state layered over the current screen.
enum Mode {
    Normal,
    AddingReview(ReviewForm),
    ConfirmReviewDelete(ConfirmReviewDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App<S: Store> {
    db: Database<S>,
    restaurants: Vec<Restaurant>,
    customers: Vec<Customer>,
    restaurant_cursor: Cursor,
    customer_cursor: Cursor,
    restaurant_detail: RestaurantDetail,
    customer_detail: CustomerDetail,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl<S: Store> App<S> {
    /// Load both lists and the detail panes for the first rows.
    pub fn new(db: Database<S>) -> Result<Self> {
        let mut app = Self {
            db,
            restaurants: Vec::new(),
            customers: Vec::new(),
            restaurant_cursor: Cursor::default(),
            customer_cursor: Cursor::default(),
            restaurant_detail: RestaurantDetail::default(),
            customer_detail: CustomerDetail::default(),
            screen: Screen::Restaurants,
            mode: Mode::Normal,
            status: None,
        };
        app.reload().context("failed to load restaurants and customers")?;
        Ok(app)
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingReview(form) => self.handle_add_review(code, form)?,
            Mode::ConfirmReviewDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.clear_status();
                self.screen = match self.screen {
                    Screen::Restaurants => Screen::Customers,
                    Screen::Customers => Screen::Restaurants,
                };
            }
            KeyCode::Up => self.move_list(-1)?,
            KeyCode::Down => self.move_list(1)?,
            KeyCode::Home => self.move_list(isize::MIN / 2)?,
            KeyCode::End => self.move_list(isize::MAX / 2)?,
            KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.customers.is_empty() || self.restaurants.is_empty() {
                    self.set_status(
                        "Reviews need at least one customer and one restaurant.",
                        StatusKind::Error,
                    );
                } else {
                    self.clear_status();
                    let restaurant = match self.screen {
                        Screen::Restaurants => self.restaurant_cursor.selected,
                        Screen::Customers => self.highlighted_restaurant_index(),
                    };
                    return Ok(Mode::AddingReview(ReviewForm::for_pair(
                        self.customer_cursor.selected,
                        restaurant,
                    )));
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => self.show_fanciest()?,
            _ => {}
        }

        if self.screen == Screen::Customers {
            match code {
                KeyCode::Left => self.customer_detail.cursor.move_selection(
                    -1,
                    self.customer_detail.restaurants.len(),
                ),
                KeyCode::Right => self.customer_detail.cursor.move_selection(
                    1,
                    self.customer_detail.restaurants.len(),
                ),
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                    return Ok(self.confirm_delete_for_highlighted());
                }
                _ => {}
            }
        }

        Ok(Mode::Normal)
    }

    fn handle_add_review(&mut self, code: KeyCode, mut form: ReviewForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add review cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left => {
                let len = self.choice_len(form.active);
                form.cycle_choice(-1, len);
            }
            KeyCode::Right => {
                let len = self.choice_len(form.active);
                form.cycle_choice(1, len);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_review(&form) {
                Ok(_) => keep_open = false,
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingReview(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmReviewDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.perform_delete(&confirm) {
                    Ok(_) => Ok(Mode::Normal),
                    Err(err) => {
                        let message = surface_error(&err);
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::ConfirmReviewDelete(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmReviewDelete(confirm)),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(LIST_WIDTH_PERCENT),
                Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
            ])
            .split(content_area);

        match self.screen {
            Screen::Restaurants => {
                self.draw_restaurant_list(frame, columns[0]);
                self.draw_restaurant_detail(frame, columns[1]);
            }
            Screen::Customers => {
                self.draw_customer_list(frame, columns[0]);
                self.draw_customer_detail(frame, columns[1]);
            }
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingReview(form) => self.draw_review_form(frame, area, form),
            Mode::ConfirmReviewDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_restaurant_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .restaurants
            .iter()
            .map(|restaurant| {
                ListItem::new(Line::from(vec![
                    Span::raw(restaurant.name.clone()),
                    Span::styled(
                        format!("  {}", restaurant.price_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        self.render_list(frame, area, "Restaurants", items, self.restaurant_cursor.selected);
    }

    fn draw_customer_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .customers
            .iter()
            .map(|customer| ListItem::new(customer.full_name()))
            .collect();
        self.render_list(frame, area, "Customers", items, self.customer_cursor.selected);
    }

    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        items: Vec<ListItem>,
        selected: usize,
    ) {
        if items.is_empty() {
            let message = Paragraph::new("Nothing here yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title.to_string()));
            frame.render_widget(message, area);
            return;
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_restaurant_detail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Reviews");
        let Some(restaurant) = self.current_restaurant() else {
            frame.render_widget(block, area);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    restaurant.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  •  price {}", restaurant.price_label())),
            ]),
            Line::from(self.reviewers_line()),
            Line::from(""),
        ];

        if self.restaurant_detail.reviews.is_empty() {
            lines.push(Line::from(Span::styled(
                "No reviews yet. Press 'a' to add one.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.extend(
            self.restaurant_detail
                .reviews
                .iter()
                .map(|review| Line::from(review.clone())),
        );

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn reviewers_line(&self) -> String {
        if self.restaurant_detail.reviewers.is_empty() {
            return "Reviewed by: nobody".to_string();
        }
        let names: Vec<String> = self
            .restaurant_detail
            .reviewers
            .iter()
            .map(Customer::full_name)
            .collect();
        format!("Reviewed by: {}", names.join(", "))
    }

    fn draw_customer_detail(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let favorite = match &self.customer_detail.favorite {
            Some(restaurant) => format!("Favorite: {}", restaurant.name),
            None => "Favorite: none yet".to_string(),
        };
        let header = Paragraph::new(Line::from(favorite))
            .block(Block::default().borders(Borders::ALL).title("Customer"));
        frame.render_widget(header, chunks[0]);

        if self.customer_detail.restaurants.is_empty() {
            let message = Paragraph::new("No reviews yet. Press 'a' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Reviewed"));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .customer_detail
            .restaurants
            .iter()
            .map(|(restaurant, reviews)| {
                let mut lines = vec![Line::from(restaurant.name.clone())];
                lines.extend(reviews.iter().map(|review| {
                    Line::from(vec![
                        Span::styled(
                            format!("   {} ", star_bar(review.star_rating)),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(review.feedback.clone()),
                    ])
                }));
                ListItem::new(lines)
            })
            .collect();
        self.render_list(
            frame,
            chunks[1],
            "Reviewed (←/→)",
            items,
            self.customer_detail.cursor.selected,
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = match (&self.mode, self.screen) {
            (Mode::AddingReview(_), _) => vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next field   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Choose   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ],
            (Mode::ConfirmReviewDelete(_), _) => vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[N]", key_style),
                Span::raw(" Keep"),
            ],
            (Mode::Normal, Screen::Restaurants) => vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Customers   "),
                Span::styled("[f]", key_style),
                Span::raw(" Fanciest   "),
            ],
            (Mode::Normal, Screen::Customers) => vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Restaurant   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Restaurants   "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete reviews   "),
            ],
        };
        if matches!(self.mode, Mode::Normal) {
            spans.extend([
                Span::styled("[a]", key_style),
                Span::raw(" Add review   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]);
        }
        Line::from(spans)
    }

    fn draw_review_form(&self, frame: &mut Frame, area: Rect, form: &ReviewForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Review").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let customer = self
            .customers
            .get(form.customer)
            .map(Customer::full_name)
            .unwrap_or_default();
        let restaurant = self
            .restaurants
            .get(form.restaurant)
            .map(|r| r.name.clone())
            .unwrap_or_default();

        let mut lines = vec![
            form.choice_line("Customer", ReviewField::Customer, &customer),
            form.choice_line("Restaurant", ReviewField::Restaurant, &restaurant),
            form.build_line("Stars", ReviewField::Rating),
            form.build_line("Feedback", ReviewField::Feedback),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor = match form.active {
            ReviewField::Rating => Some(("Stars: ", ReviewField::Rating, 2)),
            ReviewField::Feedback => Some(("Feedback: ", ReviewField::Feedback, 3)),
            ReviewField::Customer | ReviewField::Restaurant => None,
        };
        if let Some((prefix, field, row)) = cursor {
            let x = inner.x + prefix.len() as u16 + form.value_len(field) as u16;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
        }
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmReviewDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Delete Reviews")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let noun = if confirm.count == 1 { "review" } else { "reviews" };
        let lines = vec![
            Line::from(format!(
                "Delete {} {noun} of {} by {}?",
                confirm.count,
                confirm.restaurant.name,
                confirm.customer.full_name()
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn save_review(&mut self, form: &ReviewForm) -> Result<()> {
        let (rating, feedback) = form.parse_inputs()?;
        let customer = self
            .customers
            .get(form.customer)
            .cloned()
            .context("No customer selected.")?;
        let restaurant = self
            .restaurants
            .get(form.restaurant)
            .cloned()
            .context("No restaurant selected.")?;

        self.db
            .add_review(customer.id, restaurant.id, rating, &feedback)
            .context("failed to add review")?;
        self.reload()?;
        self.set_status(
            format!(
                "Added review of {} by {}.",
                restaurant.name,
                customer.full_name()
            ),
            StatusKind::Info,
        );
        Ok(())
    }

    fn confirm_delete_for_highlighted(&mut self) -> Mode {
        let Some(customer) = self.current_customer().cloned() else {
            self.set_status("No customer selected.", StatusKind::Error);
            return Mode::Normal;
        };
        let Some((restaurant, reviews)) = self.customer_detail.current().cloned() else {
            self.set_status(
                format!("{} has no reviews to delete.", customer.full_name()),
                StatusKind::Error,
            );
            return Mode::Normal;
        };
        self.clear_status();
        Mode::ConfirmReviewDelete(ConfirmReviewDelete {
            customer,
            restaurant,
            count: reviews.len(),
        })
    }

    fn perform_delete(&mut self, confirm: &ConfirmReviewDelete) -> Result<()> {
        let deleted = self
            .db
            .delete_reviews_for_restaurant(confirm.customer.id, confirm.restaurant.id)
            .context("failed to delete reviews")?;
        self.reload()?;
        self.set_status(
            format!(
                "Deleted {deleted} review(s) of {} by {}.",
                confirm.restaurant.name,
                confirm.customer.full_name()
            ),
            StatusKind::Info,
        );
        Ok(())
    }

    fn show_fanciest(&mut self) -> Result<()> {
        match self.db.fanciest() {
            Ok(restaurant) => {
                if let Some(idx) = self.restaurants.iter().position(|r| r.id == restaurant.id) {
                    self.screen = Screen::Restaurants;
                    self.restaurant_cursor.selected = idx;
                    self.refresh_restaurant_detail()?;
                }
                self.set_status(
                    format!(
                        "Fanciest restaurant: {} ({}).",
                        restaurant.name,
                        restaurant.price_label()
                    ),
                    StatusKind::Info,
                );
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
        Ok(())
    }

    /// Re-read both lists and both detail panes, keeping selections in range.
    fn reload(&mut self) -> Result<()> {
        self.restaurants = self.db.restaurants()?;
        self.customers = self.db.customers()?;
        self.restaurant_cursor.ensure_in_bounds(self.restaurants.len());
        self.customer_cursor.ensure_in_bounds(self.customers.len());
        self.refresh_restaurant_detail()?;

        let highlighted = self.customer_detail.cursor;
        self.refresh_customer_detail()?;
        self.customer_detail.cursor = highlighted;
        self.customer_detail
            .cursor
            .ensure_in_bounds(self.customer_detail.restaurants.len());
        Ok(())
    }

    fn refresh_restaurant_detail(&mut self) -> Result<()> {
        self.restaurant_detail = RestaurantDetail::load(&self.db, self.current_restaurant())?;
        Ok(())
    }

    fn refresh_customer_detail(&mut self) -> Result<()> {
        self.customer_detail = CustomerDetail::load(&self.db, self.current_customer())?;
        Ok(())
    }

    fn move_list(&mut self, offset: isize) -> Result<()> {
        match self.screen {
            Screen::Restaurants => {
                self.restaurant_cursor
                    .move_selection(offset, self.restaurants.len());
                self.refresh_restaurant_detail()
            }
            Screen::Customers => {
                self.customer_cursor.move_selection(offset, self.customers.len());
                self.refresh_customer_detail()
            }
        }
    }

    fn choice_len(&self, field: ReviewField) -> usize {
        match field {
            ReviewField::Customer => self.customers.len(),
            ReviewField::Restaurant => self.restaurants.len(),
            ReviewField::Rating | ReviewField::Feedback => 0,
        }
    }

    /// List position of the restaurant highlighted in the customer pane, or
    /// the first restaurant when the customer has no reviews.
    fn highlighted_restaurant_index(&self) -> usize {
        self.customer_detail
            .current()
            .and_then(|(restaurant, _)| self.restaurants.iter().position(|r| r.id == restaurant.id))
            .unwrap_or(0)
    }

    fn current_restaurant(&self) -> Option<&Restaurant> {
        self.restaurants.get(self.restaurant_cursor.selected)
    }

    fn current_customer(&self) -> Option<&Customer> {
        self.customers.get(self.customer_cursor.selected)
    }
}
