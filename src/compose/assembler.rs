use std::fmt::Display;

use tracing::{debug, info};

use crate::{
    config::Session,
    prompt::Prompter,
    tools::buffer::{TextBuffer, place_cursor},
};

use super::{
    category::{Category, CategoryRegistry},
    errors::ComposeError,
};

/// What the user picked for one message
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub category: Category,
    pub scope: Option<String>,
    pub breaking: bool,
}

impl Selection {
    /// `{short_code}({scope})!: {placeholder}`, where the scope segment is dropped when the scope is
    /// absent or empty and `!` only appears for breaking changes. Nothing is escaped.
    pub fn render(&self, placeholder: &str) -> String {
        format!("{self}: {placeholder}")
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category.short_code)?;
        if let Some(scope) = self.scope.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "({scope})")?;
        }
        if self.breaking {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// Answers supplied up front; a preset question is not asked
#[derive(Debug, Default, Clone)]
pub struct Presets {
    /// Any identifying string of a category
    pub category: Option<String>,
    /// `Some(None)` skips the scope entirely
    pub scope: Option<Option<String>>,
    pub breaking: Option<bool>,
}

/// Runs the prompts in order (category, scope, breaking) and writes the result into a buffer
pub struct Composer<'s, P: Prompter> {
    session: &'s mut Session,
    prompter: P,
    presets: Presets,
}

impl<'s, P: Prompter> Composer<'s, P> {
    pub fn new(session: &'s mut Session, prompter: P) -> Self {
        Self {
            session,
            prompter,
            presets: Presets::default(),
        }
    }

    pub fn with_presets(mut self, presets: Presets) -> Self {
        self.presets = presets;
        self
    }

    /// Ask for a category among all names, short codes and aliases. The registry is rebuilt from
    /// the current configuration on every call.
    pub fn select_category(&mut self) -> Result<Category, ComposeError> {
        let registry = CategoryRegistry::new(&self.session.config.categories);
        if registry.is_empty() {
            return Err(ComposeError::NoCategories);
        }

        let key = match self.presets.category.clone() {
            Some(key) => key,
            None => self.prompter.choose_one("Type", &registry.keys(), true)?,
        };

        let category = registry
            .resolve(&key)
            .cloned()
            .ok_or_else(|| ComposeError::UnknownCategory(key.clone()))?;
        debug!(%key, short_code = %category.short_code, "Category selected");

        Ok(category)
    }

    /// Ask whether to add a scope and, if so, which one. New scopes join the session history when
    /// `scopes-accrue` is on.
    pub fn select_scope(&mut self) -> Result<Option<String>, ComposeError> {
        let scope = match self.presets.scope.clone() {
            Some(scope) => scope,
            None => {
                if !self.prompter.confirm("Include a scope?")? {
                    return Ok(None);
                }
                Some(self.prompter.read_text("Scope", &self.session.history.candidates())?)
            }
        };

        if let Some(scope) = scope.as_deref().filter(|s| !s.is_empty()) {
            if self.session.config.scopes_accrue {
                self.session.history.add(scope);
            }
        }

        Ok(scope)
    }

    pub fn select_breaking(&mut self) -> Result<bool, ComposeError> {
        match self.presets.breaking {
            Some(breaking) => Ok(breaking),
            None => Ok(self.prompter.confirm("Breaking change?")?),
        }
    }

    pub fn select(&mut self) -> Result<Selection, ComposeError> {
        let category = self.select_category()?;
        let scope = self.select_scope()?;
        let breaking = self.select_breaking()?;

        Ok(Selection {
            category,
            scope,
            breaking,
        })
    }

    /// Compose the prefix, insert it at the buffer's cursor and move the cursor to the
    /// placeholder. The buffer is only touched once every question has been answered.
    pub fn compose_into(&mut self, buffer: &mut TextBuffer) -> Result<Selection, ComposeError> {
        let selection = self.select()?;
        let placeholder = &self.session.config.cursor_placeholder;

        buffer.insert(&selection.render(placeholder));
        place_cursor(buffer, placeholder);
        info!(prefix = %selection, cursor = buffer.cursor(), "Message composed");

        Ok(selection)
    }
}
