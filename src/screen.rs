use gpui::{
    App, Context, Entity, FocusHandle, Focusable, MouseButton, MouseUpEvent, ScrollHandle, Window,
    actions, div, prelude::*, px, relative, rgb,
};

use crate::{glass, orb::GradientOrb, text_input::TextInput, theme::*};

actions!(glasspane, [FocusNext, FocusPrevious, Submit, Quit]);

// The screen's entire content, as data: one logo, a title, a subtitle,
// two fields, one button. The render pass below is a direct reading of
// this description.
pub struct FormField {
    pub hint: &'static str,
    pub masked: bool,
}

pub struct LoginForm {
    pub logo_glyph: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: [FormField; 2],
    pub submit_label: &'static str,
}

pub const LOGIN_FORM: LoginForm = LoginForm {
    logo_glyph: "✦",
    title: "Welcome Back",
    subtitle: "Sign in to continue",
    fields: [
        FormField {
            hint: "Username",
            masked: false,
        },
        FormField {
            hint: "Password",
            masked: true,
        },
    ],
    submit_label: "LOGIN",
};

pub struct LoginScreen {
    username_input: Entity<TextInput>,
    password_input: Entity<TextInput>,
    focus_handle: FocusHandle,
    button_focus_handle: FocusHandle,
    scroll_handle: ScrollHandle,
}

impl LoginScreen {
    pub fn new(context: &mut Context<Self>) -> Self {
        let [username, password] = &LOGIN_FORM.fields;
        let username_input = TextInput::new(context, username.hint, username.masked);
        let password_input = TextInput::new(context, password.hint, password.masked);
        Self {
            username_input,
            password_input,
            focus_handle: context.focus_handle(),
            button_focus_handle: context.focus_handle(),
            scroll_handle: ScrollHandle::new(),
        }
    }

    pub fn first_focus(&self, context: &App) -> FocusHandle {
        self.username_input.read(context).focus_handle.clone()
    }

    fn focus_entries(&self, context: &App) -> [FocusHandle; 3] {
        [
            self.username_input.read(context).focus_handle.clone(),
            self.password_input.read(context).focus_handle.clone(),
            self.button_focus_handle.clone(),
        ]
    }

    fn focus_next(&mut self, _: &FocusNext, window: &mut Window, context: &mut Context<Self>) {
        self.cycle_focus(1, window, context);
    }

    fn focus_previous(
        &mut self,
        _: &FocusPrevious,
        window: &mut Window,
        context: &mut Context<Self>,
    ) {
        self.cycle_focus(-1, window, context);
    }

    fn cycle_focus(&mut self, direction: isize, window: &mut Window, context: &mut Context<Self>) {
        let entries = self.focus_entries(context);
        let next = match entries.iter().position(|handle| handle.is_focused(window)) {
            Some(index) => {
                (index as isize + direction).rem_euclid(entries.len() as isize) as usize
            }
            None => 0,
        };
        window.focus(&entries[next], context);
        context.notify();
    }

    // Visual demo: the button acknowledges the tap and does nothing else.
    fn submit(&mut self, _: &Submit, _window: &mut Window, _context: &mut Context<Self>) {
        log::info!("[login] {} pressed", LOGIN_FORM.submit_label);
    }

    fn on_submit_click(
        &mut self,
        _: &MouseUpEvent,
        window: &mut Window,
        context: &mut Context<Self>,
    ) {
        self.submit(&Submit, window, context);
    }
}

impl Focusable for LoginScreen {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for LoginScreen {
    fn render(&mut self, _window: &mut Window, context: &mut Context<Self>) -> impl IntoElement {
        div()
            .key_context("LoginScreen")
            .track_focus(&self.focus_handle(context))
            .on_action(context.listener(Self::focus_next))
            .on_action(context.listener(Self::focus_previous))
            .on_action(context.listener(Self::submit))
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(SURFACE))
            .child(
                div()
                    .absolute()
                    .top(px(ORB_OFFSET_Y))
                    .left(px(ORB_OFFSET_X))
                    .size(px(ORB_DIAMETER))
                    .child(GradientOrb::new(ORB_VIOLET)),
            )
            .child(
                div()
                    .absolute()
                    .bottom(px(ORB_OFFSET_Y))
                    .right(px(ORB_OFFSET_X))
                    .size(px(ORB_DIAMETER))
                    .child(GradientOrb::new(ORB_CYAN)),
            )
            .child(
                div()
                    .size_full()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .px(px(SCREEN_PADDING))
                    .child(
                        div()
                            .id("login-scroll")
                            .max_h(relative(1.))
                            .overflow_y_scroll()
                            .track_scroll(&self.scroll_handle)
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap(px(GAP_LARGE))
                            .py(px(GAP_LARGE))
                            .child(glass::logo(LOGIN_FORM.logo_glyph))
                            .child(
                                glass::card()
                                    .child(
                                        div()
                                            .flex()
                                            .flex_col()
                                            .items_center()
                                            .gap(px(GAP_SMALL))
                                            .child(glass::title(LOGIN_FORM.title))
                                            .child(glass::subtitle(LOGIN_FORM.subtitle)),
                                    )
                                    .child(self.username_input.clone())
                                    .child(self.password_input.clone())
                                    .child(
                                        glass::button(
                                            LOGIN_FORM.submit_label,
                                            &self.button_focus_handle,
                                        )
                                        .on_mouse_up(
                                            MouseButton::Left,
                                            context.listener(Self::on_submit_click),
                                        ),
                                    ),
                            ),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_lists_exactly_two_fields() {
        assert_eq!(LOGIN_FORM.fields.len(), 2);
        assert_eq!(LOGIN_FORM.fields[0].hint, "Username");
        assert_eq!(LOGIN_FORM.fields[1].hint, "Password");
    }

    #[test]
    fn only_the_password_field_is_masked() {
        let masked: Vec<_> = LOGIN_FORM
            .fields
            .iter()
            .filter(|field| field.masked)
            .collect();
        assert_eq!(masked.len(), 1);
        assert_eq!(masked[0].hint, "Password");
    }

    #[test]
    fn submit_label_is_login() {
        assert_eq!(LOGIN_FORM.submit_label, "LOGIN");
    }

    #[test]
    fn header_content_is_present() {
        assert!(!LOGIN_FORM.logo_glyph.is_empty());
        assert!(!LOGIN_FORM.title.is_empty());
        assert!(!LOGIN_FORM.subtitle.is_empty());
    }
}
