//! Built-in vocabularies for Solidity selector recovery
//!
//! Focuses on DEX router and bonding-curve entry points: swap/buy/sell verbs,
//! asset nouns, and the argument layouts those functions usually take.

/// Verbs for launchpad "portal" style entry points
pub const PORTAL_VERBS: &[&str] = &[
    "swap", "exact", "execute", "buy", "sell", "trade", "multicall", "route", "dispatch",
];

/// Nouns for portal entry points
pub const PORTAL_NOUNS: &[&str] = &[
    "Input", "Output", "ETH", "Tokens", "Asset", "Exact", "Single", "Multi",
];

/// Suffixes for portal entry points (the empty suffix is intentional)
pub const PORTAL_SUFFIXES: &[&str] = &[
    "", "Single", "Multi", "Params", "V2", "V3", "WithPermit", "ForTokens",
];

/// Argument layouts for portal entry points
pub const PORTAL_STRUCTURES: &[&str] = &[
    // token, amountIn, amountOutMin, path/data, recipient
    "(address,uint256,uint256,bytes,address)",
    "((address,uint256,uint256,bytes,address))",
    "(tuple(address,uint256,uint256,bytes,address))",
    // last word as deadline
    "(address,uint256,uint256,bytes,uint256)",
    "((address,uint256,uint256,bytes,uint256))",
    // four params
    "(address,uint256,uint256,bytes)",
    "((address,uint256,uint256,bytes))",
    // exactInput style
    "(bytes,uint256,uint256,address,uint256)",
    "((bytes,uint256,uint256,address,uint256))",
    // tax token routers
    "(uint256,uint256,address[],address,uint256)",
    "(uint256,uint256,address[],address)",
];

/// Complete signatures worth trying verbatim for portals
pub const PORTAL_LITERALS: &[&str] = &[
    "swapExactInput(address,uint256,uint256,bytes,address)",
    "swapExactInput((address,uint256,uint256,bytes,address))",
    "swapExactInput(tuple(address,uint256,uint256,bytes,address))",
    "exactInput(address,uint256,uint256,bytes,address)",
    "exactInput((address,uint256,uint256,bytes,address))",
    "buy(uint256,uint256)",
    "buy(address,uint256)",
    "buyToken(address,uint256)",
    "swapETHForToken(address,uint256,address,uint256)",
    "swapETHForExactTokens(uint256,address[],address,uint256)",
    "swapExactETHForTokens(uint256,address[],address,uint256)",
    "swapExactETHForTokensSupportingFeeOnTransferTokens(uint256,address[],address,uint256)",
];

/// Verbs for Uniswap V2 style routers
pub const ROUTER_VERBS: &[&str] = &["swap", "buy", "sell", "exact", "execute"];

/// Middle fragments for router names
pub const ROUTER_MIDDLES: &[&str] = &["ExactETH", "ETH", "Tokens", "Asset", "Input", "Output"];

/// Name endings for router functions
pub const ROUTER_ENDS: &[&str] = &[
    "ForTokens",
    "ForETH",
    "ForExactTokens",
    "ForExactETH",
    "SupportingFeeOnTransferTokens",
    "",
];

/// Four-argument layouts for router functions
pub const ROUTER_STRUCTURES: &[&str] = &[
    // V2 standard
    "(uint256,address[],address,uint256)",
    "(uint256,uint256,address[],address)",
    // token, amount, minOut, deadline
    "(address,uint256,uint256,uint256)",
    // token, amount, minOut, to
    "(address,uint256,uint256,address)",
    "(uint256,address,uint256,uint256)",
    "(uint256,address,address,uint256)",
    "(address[],uint256,address,uint256)",
    "(address[],uint256,uint256,address)",
    "(address,address,uint256,uint256)",
];

/// Complete router signatures worth trying verbatim
pub const ROUTER_LITERALS: &[&str] = &[
    "swapExactETHForTokensSupportingFeeOnTransferTokens(uint256,address[],address,uint256)",
    "swapExactETHForTokens(uint256,address[],address,uint256)",
    "swapExactInputSingle(tuple(address,address,uint24,address,uint256,uint256,uint256,uint160))",
    "exactInputSingle(tuple(address,address,uint24,address,uint256,uint256,uint256,uint160))",
];

/// A named built-in vocabulary
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub roles: &'static [(&'static str, &'static [&'static str])],
    pub structures: &'static [&'static str],
    pub literals: &'static [&'static str],
}

/// All built-in presets; the first one is the default
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "portal",
        description: "launchpad portal swaps (verb + noun + suffix)",
        roles: &[
            ("verb", PORTAL_VERBS),
            ("noun", PORTAL_NOUNS),
            ("suffix", PORTAL_SUFFIXES),
        ],
        structures: PORTAL_STRUCTURES,
        literals: PORTAL_LITERALS,
    },
    Preset {
        name: "router",
        description: "Uniswap V2 style routers (verb + middle + end)",
        roles: &[
            ("verb", ROUTER_VERBS),
            ("middle", ROUTER_MIDDLES),
            ("end", ROUTER_ENDS),
        ],
        structures: ROUTER_STRUCTURES,
        literals: ROUTER_LITERALS,
    },
];

/// Look up a preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Names of all presets, for help and error messages
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
