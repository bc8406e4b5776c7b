//! Cross-version highlight coordination.
//!
//! A single symbol key is resolved in both compared artifacts and turned into
//! display commands. The modified pane is the reference: it must contain the
//! symbol and is the pane that gets revealed. The original pane is optional.

use crate::domain::{
    DisplayCommand, DisplayRange, HighlightError, HighlightSelection, Pane, SourceArtifact,
    Version,
};

/// One compared version as seen by the coordinator.
#[derive(Debug, Clone, Copy)]
pub struct PaneSnapshot<'a> {
    pub version: &'a Version,
    pub artifact: &'a SourceArtifact,
    pub ready: bool,
}

/// Resolves `selection` against both snapshots.
///
/// Both panes are always cleared first, so no decoration from a previous
/// selection survives. With duplicate keys the first entry in stored order is
/// used on each side.
pub fn highlight(
    selection: &HighlightSelection,
    original: PaneSnapshot<'_>,
    modified: PaneSnapshot<'_>,
) -> Result<Vec<DisplayCommand>, HighlightError> {
    let mut commands = vec![
        DisplayCommand::ClearDecorations(Pane::Original),
        DisplayCommand::ClearDecorations(Pane::Modified),
    ];

    let Some(symbol) = selection.symbol() else {
        return Ok(commands);
    };

    let modified_entry =
        modified
            .artifact
            .find(symbol)
            .ok_or_else(|| HighlightError::SymbolNotFound {
                symbol: symbol.to_string(),
                version: modified.version.clone(),
            })?;
    let modified_range = DisplayRange::from(modified_entry.range);
    commands.push(DisplayCommand::SetDecoration {
        pane: Pane::Modified,
        range: modified_range,
    });
    commands.push(DisplayCommand::RevealPosition {
        pane: Pane::Modified,
        range: modified_range,
    });

    if let Some(original_entry) = original.artifact.find(symbol) {
        commands.push(DisplayCommand::SetDecoration {
            pane: Pane::Original,
            range: DisplayRange::from(original_entry.range),
        });
    }

    Ok(commands)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AppliedKey {
    selection: HighlightSelection,
    original: Version,
    modified: Version,
    original_ready: bool,
    modified_ready: bool,
}

/// Re-runs [`highlight`] only when its inputs changed, so repeated frames issue
/// no duplicate display commands.
#[derive(Debug, Default)]
pub struct HighlightCoordinator {
    applied: Option<AppliedKey>,
}

impl HighlightCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(None)` when nothing changed since the last call. While a
    /// symbol is selected but the modified artifact is not ready, both panes are
    /// only cleared; the symbol is applied once the artifact becomes ready.
    pub fn refresh(
        &mut self,
        selection: &HighlightSelection,
        original: PaneSnapshot<'_>,
        modified: PaneSnapshot<'_>,
    ) -> Result<Option<Vec<DisplayCommand>>, HighlightError> {
        let key = AppliedKey {
            selection: selection.clone(),
            original: original.version.clone(),
            modified: modified.version.clone(),
            original_ready: original.ready,
            modified_ready: modified.ready,
        };
        if self.applied.as_ref() == Some(&key) {
            return Ok(None);
        }
        self.applied = Some(key);

        if selection.symbol().is_some() && !modified.ready {
            return highlight(&HighlightSelection::None, original, modified).map(Some);
        }
        highlight(selection, original, modified).map(Some)
    }

    /// Forces the next `refresh` to re-issue commands (e.g. after the display
    /// content was replaced).
    pub fn invalidate(&mut self) {
        self.applied = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationEntry, Range};

    fn artifact(entries: &[(&str, [u32; 4])]) -> SourceArtifact {
        SourceArtifact::new(
            "source",
            entries
                .iter()
                .map(|(key, range)| LocationEntry::new(*key, Range::from(*range)))
                .collect(),
        )
    }

    fn pane<'a>(version: &'a Version, artifact: &'a SourceArtifact) -> PaneSnapshot<'a> {
        PaneSnapshot {
            version,
            artifact,
            ready: true,
        }
    }

    fn symbol(key: &str) -> HighlightSelection {
        HighlightSelection::Symbol(key.to_string())
    }

    fn display(range: [u32; 4]) -> DisplayRange {
        DisplayRange {
            start_line_number: range[0],
            start_column: range[1],
            end_line_number: range[2],
            end_column: range[3],
        }
    }

    #[test]
    fn symbol_in_both_decorates_both_panes() {
        let (v_old, v_new) = (Version::from("1.8"), Version::from("1.12.2"));
        let old = artifact(&[("login_start", [3, 0, 5, 2])]);
        let new = artifact(&[("keep_alive", [0, 0, 0, 10]), ("login_start", [10, 0, 10, 40])]);

        let commands =
            highlight(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new)).unwrap();

        assert_eq!(
            commands,
            vec![
                DisplayCommand::ClearDecorations(Pane::Original),
                DisplayCommand::ClearDecorations(Pane::Modified),
                DisplayCommand::SetDecoration {
                    pane: Pane::Modified,
                    range: display([11, 1, 11, 41]),
                },
                DisplayCommand::RevealPosition {
                    pane: Pane::Modified,
                    range: display([11, 1, 11, 41]),
                },
                DisplayCommand::SetDecoration {
                    pane: Pane::Original,
                    range: display([4, 1, 6, 3]),
                },
            ]
        );
    }

    #[test]
    fn symbol_missing_from_original_clears_it() {
        let (v_old, v_new) = (Version::from("1.8"), Version::from("1.12.2"));
        let old = artifact(&[]);
        let new = artifact(&[("login_start", [10, 0, 10, 40])]);

        let commands =
            highlight(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new)).unwrap();

        assert!(commands.contains(&DisplayCommand::ClearDecorations(Pane::Original)));
        assert!(!commands.iter().any(|c| matches!(
            c,
            DisplayCommand::SetDecoration {
                pane: Pane::Original,
                ..
            }
        )));
        assert!(commands.contains(&DisplayCommand::RevealPosition {
            pane: Pane::Modified,
            range: display([11, 1, 11, 41]),
        }));
    }

    #[test]
    fn none_only_clears() {
        let version = Version::from("1.8");
        let empty = artifact(&[]);
        let commands =
            highlight(&HighlightSelection::None, pane(&version, &empty), pane(&version, &empty))
                .unwrap();
        assert_eq!(
            commands,
            vec![
                DisplayCommand::ClearDecorations(Pane::Original),
                DisplayCommand::ClearDecorations(Pane::Modified),
            ]
        );
    }

    #[test]
    fn symbol_missing_from_modified_is_an_error() {
        let (v_old, v_new) = (Version::from("1.8"), Version::from("1.12.2"));
        let old = artifact(&[("login_start", [3, 0, 5, 2])]);
        let new = artifact(&[]);
        let err = highlight(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new))
            .unwrap_err();
        assert_eq!(
            err,
            HighlightError::SymbolNotFound {
                symbol: "login_start".into(),
                version: v_new,
            }
        );
    }

    #[test]
    fn duplicate_keys_use_first_entry() {
        let version = Version::from("1.8");
        let doubled = artifact(&[("disconnect", [1, 0, 1, 5]), ("disconnect", [20, 0, 20, 5])]);
        let commands = highlight(
            &symbol("disconnect"),
            pane(&version, &doubled),
            pane(&version, &doubled),
        )
        .unwrap();
        assert!(commands.contains(&DisplayCommand::SetDecoration {
            pane: Pane::Original,
            range: display([2, 1, 2, 6]),
        }));
    }

    #[test]
    fn coordinator_skips_unchanged_inputs() {
        let (v_old, v_new) = (Version::from("1.8"), Version::from("1.12.2"));
        let old = artifact(&[]);
        let new = artifact(&[("login_start", [10, 0, 10, 40])]);
        let mut coordinator = HighlightCoordinator::new();

        let first = coordinator
            .refresh(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new))
            .unwrap();
        assert!(first.is_some());
        let second = coordinator
            .refresh(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new))
            .unwrap();
        assert!(second.is_none());

        coordinator.invalidate();
        assert!(
            coordinator
                .refresh(&symbol("login_start"), pane(&v_old, &old), pane(&v_new, &new))
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn coordinator_waits_for_modified_artifact() {
        let (v_old, v_new) = (Version::from("1.8"), Version::from("1.12.2"));
        let empty = artifact(&[]);
        let ready = artifact(&[("login_start", [10, 0, 10, 40])]);
        let mut coordinator = HighlightCoordinator::new();

        let pending = PaneSnapshot {
            ready: false,
            ..pane(&v_new, &empty)
        };
        assert_eq!(
            coordinator
                .refresh(&symbol("login_start"), pane(&v_old, &empty), pending)
                .unwrap(),
            Some(vec![
                DisplayCommand::ClearDecorations(Pane::Original),
                DisplayCommand::ClearDecorations(Pane::Modified),
            ])
        );
        assert!(
            coordinator
                .refresh(&symbol("login_start"), pane(&v_old, &empty), pending)
                .unwrap()
                .is_none()
        );

        let commands = coordinator
            .refresh(&symbol("login_start"), pane(&v_old, &empty), pane(&v_new, &ready))
            .unwrap()
            .expect("commands");
        assert!(commands.contains(&DisplayCommand::RevealPosition {
            pane: Pane::Modified,
            range: display([11, 1, 11, 41]),
        }));
    }

    #[test]
    fn switching_to_pending_modified_clears_previous_highlight() {
        let (v_old, v_new, v_next) = (
            Version::from("1.8"),
            Version::from("1.12.2"),
            Version::from("1.20"),
        );
        let ready = artifact(&[("keep_alive", [3, 0, 5, 1])]);
        let placeholder = artifact(&[]);
        let mut coordinator = HighlightCoordinator::new();
        coordinator
            .refresh(&symbol("keep_alive"), pane(&v_old, &ready), pane(&v_new, &ready))
            .unwrap();

        let pending = PaneSnapshot {
            ready: false,
            ..pane(&v_next, &placeholder)
        };
        let commands = coordinator
            .refresh(&symbol("keep_alive"), pane(&v_old, &ready), pending)
            .unwrap()
            .expect("commands");
        assert_eq!(
            commands,
            vec![
                DisplayCommand::ClearDecorations(Pane::Original),
                DisplayCommand::ClearDecorations(Pane::Modified),
            ]
        );
    }

    #[test]
    fn switching_selection_clears_before_setting() {
        let version = Version::from("1.8");
        let both = artifact(&[("a", [0, 0, 0, 1]), ("b", [5, 0, 5, 1])]);
        let mut coordinator = HighlightCoordinator::new();
        coordinator
            .refresh(&symbol("a"), pane(&version, &both), pane(&version, &both))
            .unwrap();

        let commands = coordinator
            .refresh(&symbol("b"), pane(&version, &both), pane(&version, &both))
            .unwrap()
            .expect("commands");
        assert_eq!(commands[0], DisplayCommand::ClearDecorations(Pane::Original));
        assert_eq!(commands[1], DisplayCommand::ClearDecorations(Pane::Modified));
        assert!(matches!(
            commands[2],
            DisplayCommand::SetDecoration {
                pane: Pane::Modified,
                ..
            }
        ));
    }
}
