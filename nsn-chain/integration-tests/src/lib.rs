// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// NSN Chain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! # NSN Integration Tests
//!
//! This crate contains integration tests that validate cross-pallet interactions
//! between the vote escrow and vote weighting pallets. Unlike unit tests which mock
//! the escrow, these tests read REAL voting power through the escrow's view adapter.
//!
//! ## Test Modules
//!
//! - `governance_supply_tests` - Past votes and past supply as a governance tally sees them
//! - `escrow_weighting_tests` - Escrow locks → nominee weight allocation
//! - `lock_manager_tests` - Locks funded by another pallet on behalf of a beneficiary
//!
//! ## Critical Integration Chains
//!
//! 1. **Escrow → Governance Chain:**
//!    - VoteEscrowView::past_votes() and past_total_supply() agree at every block
//!    - Future blocks are rejected instead of reading as zero
//!
//! 2. **Escrow → Weighting Chain:**
//!    - Vote weighting reads the voter's slope and unlock time through the view
//!    - Re-locking after withdrawal feeds a fresh slope into new votes
//!
//! 3. **Vesting → Escrow Chain:**
//!    - LockManager::create_lock_for() lets a payer fund a beneficiary's lock

#![cfg(test)]

mod mock;

mod escrow_weighting_tests;
