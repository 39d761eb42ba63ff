use crate::assets::{Asset, AssetRegistry, WalletAddress};
use crate::balances::BalanceSet;
use crate::constants::{NATIVE_QUANTITY_DISPLAY_PLACES, TOKEN_QUANTITY_DISPLAY_PLACES};
use crate::portfolio::valuation::Valuation;
use crate::utils::number_format::{format_fixed, format_usd};

use super::strategy_format::StrategyFormat;

fn display_places(asset: &Asset) -> u32 {
    if asset.is_native() {
        NATIVE_QUANTITY_DISPLAY_PLACES
    } else {
        TOKEN_QUANTITY_DISPLAY_PLACES
    }
}

/// Renders the rebalancing prompt.
///
/// Assets are listed in registry order with their quantity and USD value,
/// followed by the portfolio total and the user's request verbatim. The same
/// inputs always produce the same text.
pub fn build_rebalance_prompt(
    registry: &AssetRegistry,
    balances: &BalanceSet,
    valuation: &Valuation,
    user_request: &str,
    format: &StrategyFormat,
) -> String {
    let holdings: String = registry
        .assets()
        .iter()
        .map(|asset| {
            format!(
                "- {}: {} (${})\n",
                asset.symbol,
                format_fixed(balances.quantity(&asset.symbol), display_places(asset)),
                format_usd(valuation.value_of(&asset.symbol)),
            )
        })
        .collect();

    format!(
        "You are a crypto portfolio rebalancing agent.\n\
         \n\
         Based on the wallet's token holdings and market prices, {instruction}\n\
         \n\
         Wallet Balances:\n\
         {holdings}\
         Total Portfolio USD: ~${total}\n\
         \n\
         User request: {request}",
        instruction = format.instruction(&registry.symbols()),
        holdings = holdings,
        total = format_usd(valuation.total),
        request = user_request,
    )
}

/// Renders the free-form advice prompt for the Walli persona.
pub fn build_advice_prompt(
    registry: &AssetRegistry,
    address: &WalletAddress,
    balances: &BalanceSet,
    user_request: &str,
) -> String {
    let native = registry.native();
    let tokens: String = registry
        .tokens()
        .iter()
        .map(|asset| {
            format!(
                "{}: {}\n",
                asset.symbol,
                format_fixed(balances.quantity(&asset.symbol), display_places(asset))
            )
        })
        .collect();

    format!(
        "Your name is Walli-a crypto co-agent. You analyze wallet {address} activity \
         and answer the user's request below.\n\
         \n\
         User Input:\n\
         {request}\n\
         \n\
         Wallet {symbol} balance: {native} {symbol}\n\
         \n\
         Other Token Balances:\n\
         {tokens}\
         \n\
         Only respond with actionable DeFi advice based on market logic.",
        address = address,
        request = user_request,
        symbol = native.symbol,
        native = format_fixed(
            balances.quantity(&native.symbol),
            NATIVE_QUANTITY_DISPLAY_PLACES
        ),
        tokens = tokens,
    )
}
