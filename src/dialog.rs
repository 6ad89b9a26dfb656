//! Dialog catalog
//!
//! Static, total mapping from [`DialogKind`] to the [`DialogContent`] shown
//! when that kind of dialog is open. The mapping is a single exhaustive
//! `match`, so adding a kind without content is a compile error.

use crate::config::colors;
use ratatui::style::Color;

/// The five kinds of modal dialog offered by the screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Confirmation,
    Deletion,
    Information,
    Authentication,
    CriticalError,
}

/// What a dialog's confirm action does to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEffect {
    /// Replace the status message
    SetStatus(&'static str),
    /// Close the dialog, leaving the status untouched
    Dismiss,
}

/// A button inside an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    #[default]
    Confirm,
    Cancel,
}

/// Display content of a dialog plus the action fired on confirmation
#[derive(Debug, Clone, Copy)]
pub struct DialogContent {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    /// `None` when the dialog only offers the confirm button
    pub cancel_label: Option<&'static str>,
    pub on_confirm: fn() -> ConfirmEffect,
}

impl DialogContent {
    /// Buttons present on this dialog, confirm first
    pub fn choices(&self) -> &'static [DialogChoice] {
        if self.cancel_label.is_some() {
            &[DialogChoice::Confirm, DialogChoice::Cancel]
        } else {
            &[DialogChoice::Confirm]
        }
    }

    /// Label for a choice, if the dialog has that button
    pub fn label_for(&self, choice: DialogChoice) -> Option<&'static str> {
        match choice {
            DialogChoice::Confirm => Some(self.confirm_label),
            DialogChoice::Cancel => self.cancel_label,
        }
    }
}

impl DialogKind {
    /// All kinds in the order their buttons appear on screen
    pub const ALL: [DialogKind; 5] = [
        DialogKind::Confirmation,
        DialogKind::Deletion,
        DialogKind::Information,
        DialogKind::Authentication,
        DialogKind::CriticalError,
    ];

    /// Look up the catalog entry for this kind
    pub fn content(self) -> DialogContent {
        match self {
            DialogKind::Confirmation => DialogContent {
                title: "Confirmación de Acción",
                message: "¿Estás seguro de que deseas continuar con esta acción?",
                confirm_label: "Sí",
                cancel_label: Some("No"),
                on_confirm: || ConfirmEffect::SetStatus("Acción Confirmada"),
            },
            DialogKind::Deletion => DialogContent {
                title: "Eliminar Elemento",
                message: "Esta acción es irreversible. ¿Deseas eliminar este elemento?",
                confirm_label: "Eliminar",
                cancel_label: Some("Cancelar"),
                on_confirm: || ConfirmEffect::SetStatus("Elemento Eliminado"),
            },
            DialogKind::Information => DialogContent {
                title: "Aviso Importante",
                message: "Recuerda que los cambios realizados no se pueden deshacer.",
                confirm_label: "Entendido",
                cancel_label: None,
                on_confirm: || ConfirmEffect::Dismiss,
            },
            DialogKind::Authentication => DialogContent {
                title: "Requiere Autenticación",
                message: "Para continuar, necesitas autenticarte de nuevo.",
                confirm_label: "Autenticar",
                cancel_label: Some("Cancelar"),
                on_confirm: || ConfirmEffect::SetStatus("Usuario Autenticado"),
            },
            DialogKind::CriticalError => DialogContent {
                title: "Error Crítico",
                message: "Se ha producido un error crítico. ¿Deseas intentar nuevamente?",
                confirm_label: "Reintentar",
                cancel_label: Some("Cancelar"),
                on_confirm: || ConfirmEffect::SetStatus("Intento de Reintento"),
            },
        }
    }

    /// Text on the main-screen button that opens this dialog
    pub fn label(self) -> &'static str {
        match self {
            DialogKind::Confirmation => "Botón 1: Confirmación",
            DialogKind::Deletion => "Botón 2: Eliminación",
            DialogKind::Information => "Botón 3: Información",
            DialogKind::Authentication => "Botón 4: Autenticación",
            DialogKind::CriticalError => "Botón 5: Error Crítico",
        }
    }

    /// Digit key that presses this kind's button
    pub fn shortcut(self) -> char {
        match self {
            DialogKind::Confirmation => '1',
            DialogKind::Deletion => '2',
            DialogKind::Information => '3',
            DialogKind::Authentication => '4',
            DialogKind::CriticalError => '5',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.shortcut() == c)
    }

    /// Button background colour
    pub fn accent(self) -> Color {
        match self {
            DialogKind::Confirmation => colors::GREEN,
            DialogKind::Deletion => colors::RED,
            DialogKind::Information => colors::BLUE,
            DialogKind::Authentication => colors::ORANGE,
            DialogKind::CriticalError => colors::PURPLE,
        }
    }

    /// Position of this kind's button on screen
    pub fn index(self) -> usize {
        match self {
            DialogKind::Confirmation => 0,
            DialogKind::Deletion => 1,
            DialogKind::Information => 2,
            DialogKind::Authentication => 3,
            DialogKind::CriticalError => 4,
        }
    }
}

/// Catalog lookup, equivalent to [`DialogKind::content`]
pub fn lookup(kind: DialogKind) -> DialogContent {
    kind.content()
}
