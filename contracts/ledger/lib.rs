#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod model;

pub use model::{Error, GuardPolicy, Result, Role};

#[ink::contract]
mod ledger {
    use crate::model::{Error, GuardPolicy, Result, Role};
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: AccountId,
        #[ink(topic)]
        to_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Minted {
        #[ink(topic)]
        to_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Burned {
        #[ink(topic)]
        from_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct FrozenSet {
        #[ink(topic)]
        target_acc: AccountId,
        frozen_flag: bool,
    }

    #[ink(event)]
    pub struct AdminSet {
        #[ink(topic)]
        admin_acc: AccountId,
        enabled_flag: bool,
    }

    #[ink(event)]
    pub struct PricesSet {
        sell_price: Balance,
        buy_price: Balance,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_acc: AccountId,
        #[ink(topic)]
        new_acc: AccountId,
    }

    #[ink(event)]
    pub struct CanTradeSet {
        #[ink(topic)]
        target_acc: AccountId,
        enabled_flag: bool,
    }

    #[ink(event)]
    pub struct UsersCanTradeSet {
        enabled_flag: bool,
    }

    #[ink(event)]
    pub struct UsersCanUnfreezeSet {
        enabled_flag: bool,
    }

    #[ink(event)]
    pub struct Rewarded {
        #[ink(topic)]
        from_acc: AccountId,
        #[ink(topic)]
        to_acc: AccountId,
        amount_val: Balance,
        locked_flag: bool,
        memo: String,
    }

    #[ink(event)]
    pub struct DisabledSet {
        disabled_flag: bool,
    }

    #[ink(event)]
    pub struct IcoSet {
        ico_flag: bool,
    }

    /// Emitted instead of an error when the ledger runs with `GuardPolicy::Noop`.
    #[ink(event)]
    pub struct GuardSkipped {
        #[ink(topic)]
        caller_acc: AccountId,
        reason: Error,
    }

    #[ink(storage)]
    pub struct Ledger {
        // governance / control
        owner_acc: AccountId,
        roles: Mapping<AccountId, Role>,
        frozen: Mapping<AccountId, bool>,
        can_trade: Mapping<AccountId, bool>,
        users_can_trade_flag: bool,
        users_can_unfreeze_flag: bool,
        disabled_flag: bool,
        ico_flag: bool,
        guard_policy: GuardPolicy,

        // metadata
        name: String,
        symbol: String,
        decimals: u8,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // pricing, in native units per token
        sell_price: Balance,
        buy_price: Balance,

        // versioning (future migrations)
        storage_ver_u32: u32,
    }

    impl Ledger {
        // -------- constructors --------

        /// Credits `initial_supply` to the deployer, who becomes the owner.
        #[ink(constructor)]
        pub fn new(
            initial_supply: Balance,
            name: String,
            symbol: String,
            decimals: u8,
            guard_policy: GuardPolicy,
        ) -> Self {
            let owner_acc = Self::env().caller();
            let mut balances = Mapping::default();
            if initial_supply > 0 {
                balances.insert(owner_acc, &initial_supply);
            }
            Self::env().emit_event(Minted { to_acc: owner_acc, amount_val: initial_supply });
            Self {
                owner_acc,
                roles: Mapping::default(),
                frozen: Mapping::default(),
                can_trade: Mapping::default(),
                users_can_trade_flag: true,
                users_can_unfreeze_flag: false,
                disabled_flag: false,
                ico_flag: true,
                guard_policy,
                name,
                symbol,
                decimals,
                total_supply: initial_supply,
                balances,
                allowances: Mapping::default(),
                sell_price: 0,
                buy_price: 0,
                storage_ver_u32: 1,
            }
        }

        #[ink(constructor)]
        pub fn default() -> Self {
            Self::new(0, String::new(), String::new(), 18, GuardPolicy::Abort)
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::NotOwner)
            }
            Ok(())
        }

        fn only_owner_or_admin(&self) -> Result<()> {
            let caller_acc = self.env().caller();
            if caller_acc == self.owner_acc || self.role_of(caller_acc).can_administer() {
                return Ok(())
            }
            Err(Error::Unauthorized)
        }

        fn when_enabled(&self) -> Result<()> {
            if self.disabled_flag {
                return Err(Error::TokenDisabled)
            }
            Ok(())
        }

        fn when_not_frozen(&self, acc: AccountId) -> Result<()> {
            if self.frozen_account(acc) {
                return Err(Error::AccountFrozen)
            }
            Ok(())
        }

        /// Owner and admins always trade; everyone else needs the global
        /// switch or a per-account grant.
        fn when_trading(&self, acc: AccountId) -> Result<()> {
            if self.users_can_trade_flag
                || acc == self.owner_acc
                || self.is_admin(acc)
                || self.can_trade(acc)
            {
                return Ok(())
            }
            Err(Error::TradingDisabled)
        }

        fn not_zero(acc: AccountId) -> Result<()> {
            if acc == AccountId::from([0u8; 32]) {
                return Err(Error::ZeroAddress)
            }
            Ok(())
        }

        /// Applies the configured guard policy to the outcome of a message.
        fn settle(&self, outcome: Result<()>) -> Result<()> {
            match outcome {
                Err(reason)
                    if reason.is_guard_violation() && self.guard_policy == GuardPolicy::Noop =>
                {
                    let caller_acc = self.env().caller();
                    self.env().emit_event(GuardSkipped { caller_acc, reason });
                    Ok(())
                }
                other => other,
            }
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            self.decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get((owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn frozen_account(&self, acc: AccountId) -> bool {
            self.frozen.get(acc).unwrap_or(false)
        }

        #[ink(message)]
        pub fn role_of(&self, acc: AccountId) -> Role {
            self.roles.get(acc).unwrap_or_default()
        }

        #[ink(message)]
        pub fn is_admin(&self, acc: AccountId) -> bool {
            self.role_of(acc).can_administer()
        }

        #[ink(message)]
        pub fn can_trade(&self, acc: AccountId) -> bool {
            self.can_trade.get(acc).unwrap_or(false)
        }

        #[ink(message)]
        pub fn users_can_trade(&self) -> bool {
            self.users_can_trade_flag
        }

        #[ink(message)]
        pub fn users_can_unfreeze(&self) -> bool {
            self.users_can_unfreeze_flag
        }

        #[ink(message)]
        pub fn disabled(&self) -> bool {
            self.disabled_flag
        }

        #[ink(message)]
        pub fn ico(&self) -> bool {
            self.ico_flag
        }

        #[ink(message)]
        pub fn sell_price(&self) -> Balance {
            self.sell_price
        }

        #[ink(message)]
        pub fn buy_price(&self) -> Balance {
            self.buy_price
        }

        #[ink(message)]
        pub fn guard_policy(&self) -> GuardPolicy {
            self.guard_policy
        }

        #[ink(message)]
        pub fn storage_version(&self) -> u32 {
            self.storage_ver_u32
        }

        // -------- admin / roles --------

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_acc: AccountId) -> Result<()> {
            let outcome = self.transfer_ownership_internal(new_acc);
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_admin(&mut self, admin_acc: AccountId, enabled_flag: bool) -> Result<()> {
            let outcome = self.only_owner().map(|()| {
                let role = if enabled_flag { Role::Admin } else { Role::Holder };
                self.roles.insert(admin_acc, &role);
                self.env().emit_event(AdminSet { admin_acc, enabled_flag });
            });
            self.settle(outcome)
        }

        /// Owner or admin. Frozen accounts can neither send nor receive.
        /// While `users_can_unfreeze` is set, an account may also unfreeze itself.
        #[ink(message)]
        pub fn freeze_account(&mut self, target_acc: AccountId, frozen_flag: bool) -> Result<()> {
            let self_unfreeze =
                !frozen_flag && self.users_can_unfreeze_flag && self.env().caller() == target_acc;
            let allowed = if self_unfreeze { Ok(()) } else { self.only_owner_or_admin() };
            let outcome = allowed.map(|()| self.set_frozen(target_acc, frozen_flag));
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_users_can_unfreeze(&mut self, enabled_flag: bool) -> Result<()> {
            let outcome = self.only_owner_or_admin().map(|()| {
                self.users_can_unfreeze_flag = enabled_flag;
                self.env().emit_event(UsersCanUnfreezeSet { enabled_flag });
            });
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_users_can_trade(&mut self, enabled_flag: bool) -> Result<()> {
            let outcome = self.only_owner_or_admin().map(|()| {
                self.users_can_trade_flag = enabled_flag;
                self.env().emit_event(UsersCanTradeSet { enabled_flag });
            });
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_can_trade(&mut self, target_acc: AccountId, enabled_flag: bool) -> Result<()> {
            let outcome = self.only_owner_or_admin().map(|()| {
                self.can_trade.insert(target_acc, &enabled_flag);
                self.env().emit_event(CanTradeSet { target_acc, enabled_flag });
            });
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn disable_token(&mut self, disabled_flag: bool) -> Result<()> {
            let outcome = self.only_owner().map(|()| {
                self.disabled_flag = disabled_flag;
                self.env().emit_event(DisabledSet { disabled_flag });
            });
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_ico(&mut self, ico_flag: bool) -> Result<()> {
            let outcome = self.only_owner_or_admin().map(|()| {
                self.ico_flag = ico_flag;
                self.env().emit_event(IcoSet { ico_flag });
            });
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn set_prices(&mut self, sell_price: Balance, buy_price: Balance) -> Result<()> {
            let outcome = self.only_owner().map(|()| {
                self.sell_price = sell_price;
                self.buy_price = buy_price;
                self.env().emit_event(PricesSet { sell_price, buy_price });
            });
            self.settle(outcome)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            let outcome = self.transfer_internal(from_acc, to_acc, amount_val);
            self.settle(outcome)
        }

        /// Sets the allowance to `amount_val`, replacing any previous value.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.write_allowance(owner_acc, spender_acc, amount_val);
            Ok(())
        }

        /// Approves `spender_acc`, then calls its `receive_approval(owner, amount, token, extra_data)`.
        /// A failing callback reverts the approval.
        #[ink(message)]
        pub fn approve_and_call(
            &mut self,
            spender_acc: AccountId,
            amount_val: Balance,
            extra_data: Vec<u8>,
        ) -> Result<()> {
            if let Err(reason) = Self::not_zero(spender_acc) {
                return self.settle(Err(reason))
            }
            let owner_acc = self.env().caller();
            self.write_allowance(owner_acc, spender_acc, amount_val);
            self.notify_spender(owner_acc, spender_acc, amount_val, extra_data)
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let new_val = current_val.checked_add(add_val).ok_or(Error::Overflow)?;
            self.write_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            let new_val = self.allowance(owner_acc, spender_acc).saturating_sub(sub_val);
            self.write_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            let outcome = self.transfer_from_internal(spender_acc, from_acc, to_acc, amount_val);
            self.settle(outcome)
        }

        /// Privileged mint: only the owner may create tokens.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let outcome = self.only_owner().and_then(|()| self.mint_internal(to_acc, amount_val));
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn burn(&mut self, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            let outcome = self.burn_internal(from_acc, amount_val);
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn burn_from(&mut self, from_acc: AccountId, amount_val: Balance) -> Result<()> {
            let spender_acc = self.env().caller();
            let outcome = self.burn_from_internal(spender_acc, from_acc, amount_val);
            self.settle(outcome)
        }

        /// Owner or admin pays `amount_val` to `to_acc`; a locked reward also freezes the recipient.
        #[ink(message)]
        pub fn reward(
            &mut self,
            to_acc: AccountId,
            amount_val: Balance,
            locked_flag: bool,
            memo: String,
        ) -> Result<()> {
            let outcome = self.reward_internal(to_acc, amount_val, locked_flag, memo);
            self.settle(outcome)
        }

        /// Hands tokens back to the owner or an admin, even from a frozen or non-trading account.
        #[ink(message)]
        pub fn transfer_reward(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            let outcome = self.transfer_reward_internal(from_acc, to_acc, amount_val);
            self.settle(outcome)
        }

        #[ink(message)]
        pub fn transfer_and_freeze(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            let outcome = self
                .only_owner_or_admin()
                .and_then(|()| self.transfer_internal(from_acc, to_acc, amount_val))
                .map(|()| self.set_frozen(to_acc, true));
            self.settle(outcome)
        }

        /// Pays out tokens held by the contract account at `buy_price` while the ICO is open.
        /// The payment must be an exact nonzero multiple of the price.
        #[ink(message, payable)]
        pub fn buy(&mut self) -> Result<()> {
            // Never settled: only a reverted call returns the payment.
            self.buy_internal()
        }

        /// Returns tokens to the contract account for `amount_val * sell_price` native units.
        #[ink(message)]
        pub fn sell(&mut self, amount_val: Balance) -> Result<()> {
            let outcome = self.sell_internal(amount_val);
            self.settle(outcome)
        }

        // ---- internals ----

        fn transfer_ownership_internal(&mut self, new_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            Self::not_zero(new_acc)?;
            let previous_acc = self.owner_acc;
            self.owner_acc = new_acc;
            self.env().emit_event(OwnershipTransferred { previous_acc, new_acc });
            Ok(())
        }

        fn transfer_internal(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            self.when_enabled()?;
            Self::not_zero(to_acc)?;
            self.when_not_frozen(from_acc)?;
            self.when_not_frozen(to_acc)?;
            self.when_trading(from_acc)?;
            self.move_balance(from_acc, to_acc, amount_val)
        }

        fn reward_internal(
            &mut self,
            to_acc: AccountId,
            amount_val: Balance,
            locked_flag: bool,
            memo: String,
        ) -> Result<()> {
            self.only_owner_or_admin()?;
            let from_acc = self.env().caller();
            self.transfer_internal(from_acc, to_acc, amount_val)?;
            if locked_flag {
                self.set_frozen(to_acc, true);
            }
            self.env().emit_event(Rewarded { from_acc, to_acc, amount_val, locked_flag, memo });
            Ok(())
        }

        fn transfer_reward_internal(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            self.when_enabled()?;
            if to_acc != self.owner_acc && !self.is_admin(to_acc) {
                return Err(Error::Unauthorized)
            }
            self.move_balance(from_acc, to_acc, amount_val)
        }

        fn transfer_from_internal(
            &mut self,
            spender_acc: AccountId,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            self.when_enabled()?;
            Self::not_zero(to_acc)?;
            self.when_not_frozen(from_acc)?;
            self.when_not_frozen(to_acc)?;
            self.when_trading(from_acc)?;
            let new_allow = self.spend_allowance(from_acc, spender_acc, amount_val)?;

            self.move_balance(from_acc, to_acc, amount_val)?;
            self.allowances.insert((from_acc, spender_acc), &new_allow);
            Ok(())
        }

        fn mint_internal(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            Self::not_zero(to_acc)?;
            let new_total = self.total_supply.checked_add(amount_val).ok_or(Error::Overflow)?;
            let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::Overflow)?;

            self.total_supply = new_total;
            self.balances.insert(to_acc, &new_to);
            self.env().emit_event(Minted { to_acc, amount_val });
            Ok(())
        }

        fn burn_internal(&mut self, from_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount_val).ok_or(Error::Overflow)?;
            let new_total = self
                .total_supply
                .checked_sub(amount_val)
                .ok_or(Error::SupplyUnderflow)?;

            self.balances.insert(from_acc, &new_from);
            self.total_supply = new_total;
            self.env().emit_event(Burned { from_acc, amount_val });
            Ok(())
        }

        fn burn_from_internal(
            &mut self,
            spender_acc: AccountId,
            from_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            let new_allow = self.spend_allowance(from_acc, spender_acc, amount_val)?;
            self.burn_internal(from_acc, amount_val)?;
            self.allowances.insert((from_acc, spender_acc), &new_allow);
            Ok(())
        }

        fn buy_internal(&mut self) -> Result<()> {
            self.when_enabled()?;
            if !self.ico_flag {
                return Err(Error::IcoClosed)
            }
            if self.buy_price == 0 {
                return Err(Error::PriceNotSet)
            }
            let buyer_acc = self.env().caller();
            let reserve_acc = self.env().account_id();
            self.when_not_frozen(buyer_acc)?;
            self.when_not_frozen(reserve_acc)?;

            let paid_val = self.env().transferred_value();
            if paid_val == 0 || paid_val % self.buy_price != 0 {
                return Err(Error::InexactPayment)
            }
            let amount_val = paid_val / self.buy_price;
            if self.balance_of(reserve_acc) < amount_val {
                return Err(Error::InsufficientReserve)
            }
            self.move_balance(reserve_acc, buyer_acc, amount_val)
        }

        fn sell_internal(&mut self, amount_val: Balance) -> Result<()> {
            if self.sell_price == 0 {
                return Err(Error::PriceNotSet)
            }
            self.when_enabled()?;
            let seller_acc = self.env().caller();
            let reserve_acc = self.env().account_id();
            self.when_not_frozen(seller_acc)?;
            self.when_not_frozen(reserve_acc)?;
            self.when_trading(seller_acc)?;
            if self.balance_of(seller_acc) < amount_val {
                return Err(Error::InsufficientBalance)
            }
            let payout_val = amount_val.checked_mul(self.sell_price).ok_or(Error::Overflow)?;
            if self.env().balance() < payout_val {
                return Err(Error::InsufficientReserve)
            }

            self.move_balance(seller_acc, reserve_acc, amount_val)?;
            self.env()
                .transfer(seller_acc, payout_val)
                .map_err(|_| Error::NativeTransferFailed)
        }

        fn notify_spender(
            &self,
            owner_acc: AccountId,
            spender_acc: AccountId,
            amount_val: Balance,
            extra_data: Vec<u8>,
        ) -> Result<()> {
            let token_acc = self.env().account_id();
            let reply = build_call::<ink::env::DefaultEnvironment>()
                .call(spender_acc)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("receive_approval")))
                        .push_arg(owner_acc)
                        .push_arg(amount_val)
                        .push_arg(token_acc)
                        .push_arg(extra_data),
                )
                .returns::<()>()
                .try_invoke();
            match reply {
                Ok(Ok(())) => Ok(()),
                _ => Err(Error::CallbackFailed),
            }
        }

        /// Remaining allowance after spending `amount_val`; nothing is written.
        fn spend_allowance(
            &self,
            owner_acc: AccountId,
            spender_acc: AccountId,
            amount_val: Balance,
        ) -> Result<Balance> {
            let current_allow = self.allowance(owner_acc, spender_acc);
            if current_allow < amount_val {
                return Err(Error::InsufficientAllowance)
            }
            current_allow.checked_sub(amount_val).ok_or(Error::Overflow)
        }

        fn write_allowance(&mut self, owner_acc: AccountId, spender_acc: AccountId, amount_val: Balance) {
            self.allowances.insert((owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount_val });
        }

        fn set_frozen(&mut self, target_acc: AccountId, frozen_flag: bool) {
            self.frozen.insert(target_acc, &frozen_flag);
            self.env().emit_event(FrozenSet { target_acc, frozen_flag });
        }

        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                return Err(Error::InsufficientBalance)
            }
            if from_acc == to_acc {
                self.env().emit_event(Transferred { from_acc, to_acc, amount_val });
                return Ok(())
            }
            let new_from = from_bal.checked_sub(amount_val).ok_or(Error::Overflow)?;
            let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::Overflow)?;

            self.balances.insert(from_acc, &new_from);
            self.balances.insert(to_acc, &new_to);
            self.env().emit_event(Transferred { from_acc, to_acc, amount_val });
            Ok(())
        }
    }


}
