/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

/// Lifecycle of an optimistic change to local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Pending,
    Committed,
    RolledBack,
}

/// An optimistic change applied to local state ahead of the server.
/// The snapshot is taken before the change is applied and restored on
/// rollback. Once committed or rolled back the mutation is settled and
/// further transitions are ignored.
#[derive(Debug)]
pub struct Mutation<T: Clone> {
    snapshot: T,
    state: MutationState,
}

impl<T: Clone> Mutation<T> {
    pub fn begin(current: &mut T, change: impl FnOnce(&mut T)) -> Self {
        let snapshot = current.clone();
        change(current);

        Mutation {
            snapshot,
            state: MutationState::Pending,
        }
    }

    pub fn state(&self) -> MutationState {
        self.state
    }

    pub fn commit(&mut self) -> MutationState {
        if self.state == MutationState::Pending {
            self.state = MutationState::Committed;
        }

        self.state
    }

    pub fn rollback(&mut self, current: &mut T) -> MutationState {
        if self.state == MutationState::Pending {
            *current = self.snapshot.clone();
            self.state = MutationState::RolledBack;
        }

        self.state
    }
}
