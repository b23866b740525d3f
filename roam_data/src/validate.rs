use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `MapDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} name '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `MapDef`.
///
/// Every problem found is returned; an empty vector means the map is sound.
///
/// ```
/// use roam_data::{MapDef, RoomDef, validate_map};
///
/// let map = MapDef {
///     start: "hall".into(),
///     rooms: vec![RoomDef {
///         name: "hall".into(),
///         desc: "A drafty hall.".into(),
///         ..RoomDef::default()
///     }],
/// };
/// assert!(validate_map(&map).is_empty());
/// ```
pub fn validate_map(map: &MapDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut rooms = HashSet::new();

    track_ids("room", map.rooms.iter().map(|r| r.name.as_str()), &mut rooms, &mut errors);

    if map.start.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start room missing".to_string(),
        });
    } else {
        check_ref("room", &map.start, &rooms, "start room".to_string(), &mut errors);
    }

    for room in &map.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "room with empty name".to_string(),
            });
        }
        for (direction, target) in &room.exits {
            if direction.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has an exit with an empty direction", room.name),
                });
            }
            check_ref(
                "room",
                target,
                &rooms,
                format!("room '{}' exit '{direction}'", room.name),
                &mut errors,
            );
        }
        if room.items.iter().any(|item| item.trim().is_empty()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' lists an item with an empty name", room.name),
            });
        }
        if let Some(win) = &room.conditions.win
            && win.item.trim().is_empty()
        {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' win condition names no item", room.name),
            });
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
