pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    // guard violations
    InsufficientBalance,
    InsufficientAllowance,
    AccountFrozen,
    ZeroAddress,
    NotOwner,
    Unauthorized,
    TokenDisabled,
    IcoClosed,
    PriceNotSet,
    InsufficientReserve,
    InexactPayment,
    TradingDisabled,

    // invariant violations
    Overflow,
    SupplyUnderflow,
    NativeTransferFailed,
    CallbackFailed,
}

impl Error {
    /// A guard violation means a precondition of the message did not hold.
    /// Anything else points at broken ledger state.
    pub fn is_guard_violation(&self) -> bool {
        !matches!(
            self,
            Error::Overflow
                | Error::SupplyUnderflow
                | Error::NativeTransferFailed
                | Error::CallbackFailed
        )
    }
}

/// What a message does when one of its guards fails.
#[derive(scale::Encode, scale::Decode, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum GuardPolicy {
    /// Return the error; the call reverts.
    #[default]
    Abort,
    /// Return `Ok(())` and leave state untouched.
    Noop,
}

#[derive(scale::Encode, scale::Decode, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum Role {
    #[default]
    Holder,
    /// May freeze accounts, toggle trading and the ICO, and hand out rewards.
    Admin,
}

impl Role {
    pub fn can_administer(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_errors_are_classified() {
        for err in [
            Error::InsufficientBalance,
            Error::InsufficientAllowance,
            Error::AccountFrozen,
            Error::ZeroAddress,
            Error::NotOwner,
            Error::Unauthorized,
            Error::TokenDisabled,
            Error::IcoClosed,
            Error::PriceNotSet,
            Error::InsufficientReserve,
            Error::InexactPayment,
            Error::TradingDisabled,
        ] {
            assert!(err.is_guard_violation(), "{err:?}");
        }
    }

    #[test]
    fn invariant_errors_are_not_guards() {
        assert!(!Error::Overflow.is_guard_violation());
        assert!(!Error::SupplyUnderflow.is_guard_violation());
        assert!(!Error::NativeTransferFailed.is_guard_violation());
        assert!(!Error::CallbackFailed.is_guard_violation());
    }

    #[test]
    fn defaults() {
        assert_eq!(GuardPolicy::default(), GuardPolicy::Abort);
        assert_eq!(Role::default(), Role::Holder);
        assert!(!Role::Holder.can_administer());
        assert!(Role::Admin.can_administer());
    }
}
