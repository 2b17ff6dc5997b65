use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Domain prices by name length. Names of five or more characters share the
/// last tier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PriceTiers {
    pub price_1_char: Uint128,
    pub price_2_char: Uint128,
    pub price_3_char: Uint128,
    pub price_4_char: Uint128,
    pub price_5_char: Uint128,
}

impl PriceTiers {
    pub fn price_for(&self, name_length: usize) -> Uint128 {
        match name_length {
            0 | 1 => self.price_1_char,
            2 => self.price_2_char,
            3 => self.price_3_char,
            4 => self.price_4_char,
            _ => self.price_5_char,
        }
    }

    /// Shorter names never cost less than longer ones.
    pub fn is_non_increasing(&self) -> bool {
        let prices = [
            self.price_1_char,
            self.price_2_char,
            self.price_3_char,
            self.price_4_char,
            self.price_5_char,
        ];
        prices.windows(2).all(|pair| pair[0] >= pair[1])
    }
}

/// Price left to pay after taking `discount_percentage` percent off.
pub fn discounted_price(base_price: Uint128, discount_percentage: u64) -> Uint128 {
    base_price.multiply_ratio(100 - discount_percentage.min(100), 100u64)
}

pub fn fee_share(amount: Uint128, fee_bps: u64) -> Uint128 {
    amount.multiply_ratio(fee_bps, BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn satrap_prices() -> PriceTiers {
        PriceTiers {
            price_1_char: Uint128::from(ONE),
            price_2_char: Uint128::from(ONE / 2),
            price_3_char: Uint128::from(ONE / 10),
            price_4_char: Uint128::from(ONE / 20),
            price_5_char: Uint128::from(ONE / 100),
        }
    }

    #[test]
    fn test_price_for_each_tier() {
        let prices = satrap_prices();
        assert_eq!(prices.price_for(1), Uint128::from(ONE));
        assert_eq!(prices.price_for(2), Uint128::from(ONE / 2));
        assert_eq!(prices.price_for(3), Uint128::from(ONE / 10));
        assert_eq!(prices.price_for(4), Uint128::from(ONE / 20));
        assert_eq!(prices.price_for(5), Uint128::from(ONE / 100));
    }

    #[test]
    fn test_long_names_use_five_char_price() {
        let prices = satrap_prices();
        for length in 5..64 {
            assert_eq!(prices.price_for(length), prices.price_for(5));
        }
        assert_eq!(prices.price_for(usize::MAX), prices.price_for(5));
    }

    #[test]
    fn test_empty_name_uses_top_tier() {
        let prices = satrap_prices();
        assert_eq!(prices.price_for(0), prices.price_for(1));
    }

    #[test]
    fn test_non_increasing() {
        assert!(satrap_prices().is_non_increasing());

        let mut flat = satrap_prices();
        flat.price_4_char = flat.price_5_char;
        assert!(flat.is_non_increasing());

        let mut inverted = satrap_prices();
        inverted.price_5_char = Uint128::from(ONE);
        assert!(!inverted.is_non_increasing());
    }

    #[test]
    fn test_discounted_price() {
        // 60% off leaves 40% to pay
        assert_eq!(
            discounted_price(Uint128::from(ONE / 100), 60),
            Uint128::from(4 * ONE / 1000)
        );
        assert_eq!(discounted_price(Uint128::from(ONE), 0), Uint128::from(ONE));
        assert_eq!(discounted_price(Uint128::from(ONE), 100), Uint128::zero());
        assert_eq!(discounted_price(Uint128::from(ONE), 250), Uint128::zero());
    }

    #[test]
    fn test_fee_share() {
        assert_eq!(fee_share(Uint128::from(1_000u128), 1_000), Uint128::from(100u128));
        assert_eq!(fee_share(Uint128::from(1_000u128), 0), Uint128::zero());
        assert_eq!(fee_share(Uint128::from(9u128), 1_000), Uint128::zero());
    }
}
