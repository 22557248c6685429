//! The picker facade.

use std::fmt;
use std::rc::Rc;

use talwin_color::ColorValue;

use crate::error::TalwinError;
use crate::models::{ColorInput, Options, PartialOptions};
use crate::services::{ColorState, EventArgs, EventBus, Handler, Update, CHANGE, COLOR};
use crate::ui::{unbind_all, BuildContext, RefInit, SwatchKey, UiBuilder, UiTree};

/// What [`Talwin::destroy`] cleaned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    /// UI listeners explicitly unbound
    pub listeners_unbound: usize,
    /// Event handler registrations dropped
    pub handlers_cleared: usize,
}

/// A color picker attached to one reference element.
///
/// Owns the configuration, the current color, the event registry and the
/// UI components built for it. Not `Send`: a picker lives on the thread
/// that drives its UI.
///
/// # Example
///
/// ```
/// use talwin::models::PartialOptions;
/// use talwin::services::{Handler, COLOR};
/// use talwin::ui::HeadlessUi;
/// use talwin::Talwin;
/// use talwin_color::OutputFormat;
///
/// let ui = HeadlessUi::new();
/// let mut picker = Talwin::new(
///     "#picker",
///     PartialOptions::new().format(OutputFormat::Rgb),
///     &ui,
/// )
/// .unwrap();
///
/// picker.on(COLOR, Handler::new(|args| {
///     println!("now {:?}", args.value());
/// }));
///
/// picker.update("#ff8000");
/// assert_eq!(picker.color_string(), "rgb(255, 128, 0)");
/// ```
pub struct Talwin {
    options: Options,
    state: ColorState,
    events: Rc<EventBus>,
    ui: UiTree,
}

impl Talwin {
    /// Attach a picker to `reference`.
    ///
    /// `options` are merged over [`Options::default`]. The picker starts from
    /// `color` when it is set and readable, otherwise from `default`. Fails
    /// if the merged default color cannot be read or the UI cannot be built.
    pub fn new(
        reference: &str,
        options: PartialOptions,
        builder: &dyn UiBuilder,
    ) -> Result<Self, TalwinError> {
        let options = Options::default().merged(options);
        let state = match &options.color {
            Some(initial) => {
                ColorState::with_fallback(initial, &options.default, options.format)?
            }
            None => ColorState::new(&options.default, options.format)?,
        };
        let events = Rc::new(EventBus::new());

        let ui = builder.build(
            reference,
            &BuildContext {
                options: &options,
                events: Rc::clone(&events),
            },
        )?;

        let mut picker = Self {
            options,
            state,
            events,
            ui,
        };
        picker.initialize();

        tracing::info!(
            reference,
            format = %picker.options.format,
            color = %picker.state,
            "Picker attached"
        );

        Ok(picker)
    }

    /// Push the current configuration into the UI.
    fn initialize(&mut self) {
        self.ui.reference.init(RefInit {
            preset: self.options.preset,
            toggle: self.options.toggle,
        });

        let mut shown = self.ui.swatches.colors();
        for color in &self.options.swatches {
            if !shown.contains(color) && self.ui.swatches.add(color) {
                shown.push(color.clone());
            }
        }

        self.ui.app.disable(self.options.disabled);
    }

    /// Merge `patch` over the current configuration and re-initialize.
    ///
    /// The color state and the event registry are kept. A new `format`
    /// re-expresses the stored color without notifying. A new `swatches`
    /// list replaces the shown swatches. On error nothing is changed.
    pub fn set_options(&mut self, patch: PartialOptions) -> Result<(), TalwinError> {
        let replace_swatches = patch.swatches.is_some();
        let next = self.options.merged(patch);

        // reject a bad default before touching anything
        ColorState::new(&next.default, next.format)?;

        if replace_swatches {
            for color in self.ui.swatches.colors() {
                if !next.swatches.contains(&color) {
                    self.ui.swatches.remove(SwatchKey::Color(color));
                }
            }
        }

        if next.format != self.options.format {
            tracing::debug!(from = %self.options.format, to = %next.format, "Switching format");
            self.state.set_format(next.format);
        }

        self.options = next;
        self.initialize();
        Ok(())
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.ui.app.is_open()
    }

    pub fn open(&mut self) {
        self.ui.app.open();
    }

    pub fn close(&mut self) {
        self.ui.app.close();
    }

    pub fn toggle(&mut self) {
        self.ui.app.toggle();
    }

    pub fn reposition(&mut self) {
        self.ui.app.reposition();
    }

    pub fn enable(&mut self) {
        self.options.disabled = false;
        self.ui.app.disable(false);
    }

    pub fn disable(&mut self) {
        self.options.disabled = true;
        self.ui.app.disable(true);
    }

    /// Register `handler` for `event`.
    pub fn on(&self, event: &str, handler: Handler) {
        self.events.on(event, handler);
    }

    /// Remove handlers. See [`EventBus::off`].
    pub fn off(&self, event: Option<&str>, handler: Option<&Handler>) {
        self.events.off(event, handler);
    }

    /// Emit `event` by hand.
    ///
    /// `color` and `change` carry the current value and this picker; any
    /// other event is emitted without arguments.
    pub fn trigger(&self, event: &str) {
        if event == COLOR || event == CHANGE {
            self.events.emit(
                event,
                &EventArgs::Color {
                    value: self.state.value(),
                    picker: self,
                },
            );
        } else {
            self.events.emit(event, &EventArgs::None);
        }
    }

    /// Handle to the event registry, for UI components created elsewhere.
    pub fn events(&self) -> Rc<EventBus> {
        Rc::clone(&self.events)
    }

    /// Set the color directly.
    ///
    /// Does not emit `color` or `change`; the returned [`Update`] says what
    /// happened. Unreadable input leaves the color as it was.
    pub fn set_color(&mut self, color: impl Into<ColorInput>) -> Update {
        self.state.update_by_string(&color.into(), true)
    }

    /// Set the color as a user gesture would: on a real change, emit
    /// `color` and then `change`.
    pub fn update(&mut self, color: impl Into<ColorInput>) -> Update {
        let update = self.state.update_by_string(&color.into(), false);
        if update.should_notify() {
            self.trigger(COLOR);
            self.trigger(CHANGE);
        }
        update
    }

    /// Current color as an owned value.
    pub fn get_color(&self) -> ColorValue {
        self.state.value()
    }

    /// Current color printed in the configured format.
    pub fn color_string(&self) -> String {
        self.state.to_string()
    }

    /// Go back to the configured default color, silently.
    pub fn reset(&mut self) -> Update {
        let default = self.options.default.clone();
        self.set_color(default)
    }

    /// Add a swatch and record it in the options, so it survives
    /// [`set_options`](Self::set_options).
    ///
    /// Returns false if the color is already listed or the UI rejected it.
    pub fn add_swatch(&mut self, color: &str) -> bool {
        if self.options.swatches.iter().any(|c| c == color) || !self.ui.swatches.add(color) {
            return false;
        }
        self.options.swatches.push(color.to_string());
        true
    }

    /// Remove a swatch by index or by color string, from the UI and from
    /// the options.
    pub fn remove_swatch(&mut self, key: impl Into<SwatchKey>) -> bool {
        let key = key.into();
        let color = match &key {
            SwatchKey::Index(index) => self.ui.swatches.colors().get(*index).cloned(),
            SwatchKey::Color(color) => Some(color.clone()),
        };

        if !self.ui.swatches.remove(key) {
            return false;
        }
        if let Some(color) = color {
            self.options.swatches.retain(|c| *c != color);
        }
        true
    }

    /// Detach the picker.
    ///
    /// Restores the reference element, unbinds every listener the UI
    /// components track, clears the event registry and drops the UI tree.
    pub fn destroy(self) -> Teardown {
        let Self { events, mut ui, .. } = self;

        ui.reference.restore();

        let listeners_unbound = unbind_all(&mut *ui.app)
            + unbind_all(&mut *ui.reference)
            + unbind_all(&mut *ui.swatches);

        let handlers_cleared = events.registration_count();
        events.clear();
        drop(ui);

        tracing::info!(listeners_unbound, handlers_cleared, "Picker destroyed");

        Teardown {
            listeners_unbound,
            handlers_cleared,
        }
    }
}

impl fmt::Debug for Talwin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Talwin")
            .field("format", &self.options.format)
            .field("color", &self.state.to_string())
            .field("events", &self.events)
            .field("ui", &self.ui)
            .finish()
    }
}
