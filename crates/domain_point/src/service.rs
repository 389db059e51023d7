//! Point balance service
//!
//! Orchestrates every balance mutation through the same sequence:
//!
//! 1. Validate the amount (no lock taken on failure)
//! 2. Acquire the per-user lock
//! 3. Read the current balance
//! 4. Compute the new balance
//! 5. Write the new balance
//! 6. Append a history entry
//! 7. Release the lock (guard drop, on every exit path)
//!
//! Reads take no per-user lock. A reader sees either the balance before or
//! after a concurrent mutation, never a torn value, because the store
//! replaces whole records.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use core_kernel::{Points, UserId};

use crate::error::PointError;
use crate::lock::LockRegistry;
use crate::model::{NewPointHistory, PointHistory, TransactionType, UserPoint};
use crate::policy::PointPolicy;
use crate::ports::{PointHistoryPort, UserPointPort};
use crate::validator::PointValidator;

/// Service for charging, using and querying user points
///
/// The service is synchronous: `charge` and `use_point` may block the calling
/// thread on the user's lock. Async callers should run them on a blocking
/// pool.
pub struct PointService {
    user_points: Arc<dyn UserPointPort>,
    histories: Arc<dyn PointHistoryPort>,
    validator: PointValidator,
    locks: LockRegistry,
    policy: PointPolicy,
}

impl PointService {
    /// Creates a service without a balance limit
    pub fn new(user_points: Arc<dyn UserPointPort>, histories: Arc<dyn PointHistoryPort>) -> Self {
        Self::with_policy(user_points, histories, PointPolicy::unbounded())
    }

    /// Creates a service that enforces `policy` on every charge
    pub fn with_policy(
        user_points: Arc<dyn UserPointPort>,
        histories: Arc<dyn PointHistoryPort>,
        policy: PointPolicy,
    ) -> Self {
        Self {
            user_points,
            histories,
            validator: PointValidator::new(),
            locks: LockRegistry::new(),
            policy,
        }
    }

    /// Number of users that have had a lock created
    ///
    /// Rejected amounts never reach the registry, so they do not count.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// Returns the current balance of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `PointError::NotFound` if the user has never been charged
    pub fn get_balance(&self, user_id: UserId) -> Result<UserPoint, PointError> {
        self.user_points
            .read(user_id)?
            .ok_or(PointError::NotFound(user_id))
    }

    /// Returns every history entry of `user_id` in append order
    ///
    /// An unknown user has an empty history.
    pub fn get_history(&self, user_id: UserId) -> Result<Vec<PointHistory>, PointError> {
        // Appends for one user happen under its lock, so store order is causal order
        Ok(self.histories.list_by_user(user_id)?)
    }

    /// Adds `amount` to the balance of `user_id`
    ///
    /// An unknown user starts from a zero balance.
    ///
    /// # Errors
    ///
    /// - `PointError::InvalidAmount` if `amount <= 0`
    /// - `PointError::ExceedBalance` if the policy limit would be crossed
    /// - `PointError::Store` if a store fails
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn charge(&self, user_id: UserId, amount: i64) -> Result<UserPoint, PointError> {
        let max_balance = self.policy.max_balance;
        self.apply(user_id, amount, TransactionType::Charge, |current, amount| {
            let current = current.unwrap_or_else(|| UserPoint::empty(user_id));
            current.charge(amount, max_balance)
        })
    }

    /// Subtracts `amount` from the balance of `user_id`
    ///
    /// # Errors
    ///
    /// - `PointError::InvalidAmount` if `amount <= 0`
    /// - `PointError::NotFound` if the user has no balance record
    /// - `PointError::InsufficientBalance` if `amount` exceeds the balance
    /// - `PointError::Store` if a store fails
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn use_point(&self, user_id: UserId, amount: i64) -> Result<UserPoint, PointError> {
        self.apply(user_id, amount, TransactionType::Use, |current, amount| {
            current
                .ok_or(PointError::NotFound(user_id))?
                .use_points(amount)
        })
    }

    fn apply<F>(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionType,
        compute: F,
    ) -> Result<UserPoint, PointError>
    where
        F: FnOnce(Option<UserPoint>, Points) -> Result<UserPoint, PointError>,
    {
        let amount = self.validator.check_amount(amount).map_err(|e| {
            warn!(%user_id, %kind, error = %e, "Rejected point mutation");
            e
        })?;

        let lock = self.locks.lock_for(user_id);
        let _guard = lock.lock();
        debug!(%user_id, %kind, "Acquired user lock");

        let current = self.user_points.read(user_id)?;
        let next = compute(current, amount).map_err(|e| {
            warn!(%user_id, %kind, %amount, error = %e, "Rejected point mutation");
            e
        })?;

        let saved = self.user_points.write(next)?;

        let entry = match kind {
            TransactionType::Charge => NewPointHistory::charge(user_id, amount, saved.updated_at()),
            TransactionType::Use => NewPointHistory::use_points(user_id, amount, saved.updated_at()),
        };
        let history = self.histories.append(entry)?;

        info!(
            %user_id,
            %kind,
            %amount,
            balance = %saved.point(),
            history_id = %history.id(),
            "Point mutation applied"
        );

        Ok(saved)
    }
}

impl std::fmt::Debug for PointService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointService")
            .field("policy", &self.policy)
            .field("locks", &self.lock_count())
            .finish()
    }
}
