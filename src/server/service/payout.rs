//! Paying providers for their work on a booking.
//!
//! Each assignment has at most one payout row. Processing is idempotent: a paid
//! assignment is never sent to the payment provider again, and every transfer
//! carries the `payout-{assignment_id}` idempotency key so a retried request after a
//! lost response cannot double pay.

use chrono::Utc;
use entity::sea_orm_active_enums::{
    AssignmentPayoutStatus, ImpactKind, PayoutStatus, ProviderKind,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        assignment::AssignmentRepository, booking::BookingRepository, chef::ChefRepository,
        farmer::FarmerRepository, impact::ImpactRepository, payout::PayoutRepository,
    },
    error::AppError,
    model::{
        assignment::{Assignment, ProviderRef},
        impact::CreateImpactMetricParams,
        page::Page,
        payout::{
            payout_blockers, AssignmentPayoutOutcome, Payout, PayoutAttemptParams, PayoutOutcome,
            PayoutRecipient,
        },
    },
    provider::payment::{PaymentGateway, TransferRequest},
};

pub struct PayoutService<'a> {
    db: &'a DatabaseConnection,
    payments: &'a dyn PaymentGateway,
    currency: &'a str,
}

impl<'a> PayoutService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        payments: &'a dyn PaymentGateway,
        currency: &'a str,
    ) -> Self {
        Self {
            db,
            payments,
            currency,
        }
    }

    /// Pays the provider behind an assignment if nothing blocks it.
    ///
    /// # Returns
    /// - `Ok(AssignmentPayoutOutcome)` - Paid, already paid, failed, or blocked
    /// - `Err(AppError::NotFound)` - Unknown assignment, or its booking or provider is gone
    pub async fn process_assignment(
        &self,
        assignment_id: i32,
    ) -> Result<AssignmentPayoutOutcome, AppError> {
        let assignment = AssignmentRepository::new(self.db)
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        self.process(assignment).await
    }

    /// Processes the payout of every assignment on a booking.
    pub async fn process_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<AssignmentPayoutOutcome>, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let assignments = AssignmentRepository::new(self.db)
            .get_by_booking(booking_id)
            .await?;

        let mut outcomes = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            outcomes.push(self.process(assignment).await?);
        }

        Ok(outcomes)
    }

    /// Retries payouts for confirmed or completed assignments of completed bookings
    /// that are not yet paid.
    ///
    /// An assignment whose processing errors is logged and skipped so one bad row
    /// does not stop the rest.
    pub async fn retry_unpaid(&self) -> Result<Vec<AssignmentPayoutOutcome>, AppError> {
        let assignments = AssignmentRepository::new(self.db)
            .get_unpaid_for_completed_bookings()
            .await?;

        let mut outcomes = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let assignment_id = assignment.id;
            match self.process(assignment).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => tracing::error!("Payout retry for assignment {} failed: {}", assignment_id, e),
            }
        }

        Ok(outcomes)
    }

    pub async fn list(
        &self,
        status: Option<PayoutStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Payout>, AppError> {
        let (payouts, total) = PayoutRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(payouts, total, page, per_page))
    }

    pub async fn list_for_provider(&self, provider: ProviderRef) -> Result<Vec<Payout>, AppError> {
        Ok(PayoutRepository::new(self.db)
            .get_by_provider(provider)
            .await?)
    }

    async fn process(&self, assignment: Assignment) -> Result<AssignmentPayoutOutcome, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let payout_repo = PayoutRepository::new(self.db);
        let assignment_id = assignment.id;

        let (booking, existing) = tokio::try_join!(
            booking_repo.find_by_id(assignment.booking_id),
            payout_repo.find_by_assignment(assignment_id),
        )?;
        let booking =
            booking.ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if let Some(payout) = existing.filter(|p| p.status == PayoutStatus::Paid) {
            return Ok(AssignmentPayoutOutcome {
                assignment_id,
                outcome: PayoutOutcome::AlreadyPaid(payout),
            });
        }

        let recipient = self.recipient_for(&assignment).await?;

        let blockers = payout_blockers(booking.status, &assignment, &recipient);
        if !blockers.is_empty() {
            tracing::info!(
                "Payout for assignment {} blocked: {:?}",
                assignment_id,
                blockers
            );
            return Ok(AssignmentPayoutOutcome {
                assignment_id,
                outcome: PayoutOutcome::Blocked(blockers),
            });
        }

        // Blockers guarantee an account is present.
        let destination = recipient.payout_account_id.unwrap_or_default();

        let payout = payout_repo
            .begin_attempt(PayoutAttemptParams {
                assignment_id,
                booking_id: booking.id,
                kind: assignment.kind,
                destination: destination.clone(),
                amount_cents: assignment.payout_amount_cents,
                currency: self.currency.to_string(),
            })
            .await?;

        let request = TransferRequest {
            amount_cents: payout.amount_cents,
            currency: payout.currency.clone(),
            destination,
            idempotency_key: format!("payout-{}", assignment_id),
            description: format!(
                "Bornfidis Provisions booking {} ({:?})",
                booking.id, assignment.kind
            ),
        };

        let assignment_repo = AssignmentRepository::new(self.db);

        match self.payments.create_transfer(request).await {
            Ok(transfer) => {
                let payout = payout_repo.mark_paid(payout.id, transfer.id).await?;
                assignment_repo
                    .set_payout_status(assignment_id, AssignmentPayoutStatus::Paid)
                    .await?;

                tracing::info!(
                    "Paid {} {} for assignment {} (transfer {})",
                    payout.amount_cents,
                    payout.currency,
                    assignment_id,
                    payout.transfer_id.as_deref().unwrap_or_default()
                );

                if assignment.kind == ProviderKind::Farmer {
                    self.record_local_spend(&assignment).await?;
                }

                Ok(AssignmentPayoutOutcome {
                    assignment_id,
                    outcome: PayoutOutcome::Paid(payout),
                })
            }
            Err(err) => {
                tracing::warn!("Payout for assignment {} failed: {}", assignment_id, err);

                let payout = payout_repo.mark_failed(payout.id, err.to_string()).await?;
                assignment_repo
                    .set_payout_status(assignment_id, AssignmentPayoutStatus::Failed)
                    .await?;

                Ok(AssignmentPayoutOutcome {
                    assignment_id,
                    outcome: PayoutOutcome::Failed(payout),
                })
            }
        }
    }

    async fn recipient_for(&self, assignment: &Assignment) -> Result<PayoutRecipient, AppError> {
        let recipient = match assignment.kind {
            ProviderKind::Chef => ChefRepository::new(self.db)
                .find_by_id(assignment.provider_id)
                .await?
                .map(|chef| PayoutRecipient::from(&chef)),
            ProviderKind::Farmer => FarmerRepository::new(self.db)
                .find_by_id(assignment.provider_id)
                .await?
                .map(|farmer| PayoutRecipient::from(&farmer)),
        };

        recipient.ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }

    async fn record_local_spend(&self, assignment: &Assignment) -> Result<(), AppError> {
        ImpactRepository::new(self.db)
            .create(CreateImpactMetricParams {
                kind: ImpactKind::LocalSpendCents,
                value: assignment.payout_amount_cents as f64,
                farmer_id: Some(assignment.provider_id),
                booking_id: Some(assignment.booking_id),
                note: None,
                recorded_on: Utc::now().date_naive(),
            })
            .await?;

        Ok(())
    }
}
