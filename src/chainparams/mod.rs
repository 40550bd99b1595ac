// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Chain parameters
//!
//! The complete parameter set of one network: message-start bytes, ports,
//! base58 version prefixes, the genesis block, seed peers and the consensus
//! switchover heights.
//!
//! A parameter set checks its own genesis block when it is built. A mismatch
//! against the expected hashes means the binary is internally inconsistent
//! and is reported as a fatal [`Error`].
//!
//! ```rust
//! use emc_chainparams::{Base58Type, ChainParams, Network};
//!
//! let params = ChainParams::new(Network::Main).unwrap();
//! assert_eq!(params.message_start(), [0xa3, 0xfb, 0xdb, 0xdb]);
//! assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[33]);
//! assert_eq!(params.data_dir(), "main");
//! ```

pub mod registry;

use std::fmt;

use rug::Integer;
use secp256k1::PublicKey;
use tracing::{debug, error};

use crate::blockdata::block::Block;
use crate::blockdata::constants::genesis_block;
use crate::consensus::Params;
use crate::hash_types::BlockHash;
use crate::network::address::Address;
use crate::network::constants::{Network, ParseNetworkError};
use crate::network::seed_table::{MAIN_HARDCODED_SEEDS, MAIN_PACKED_SEEDS, TESTNET_PACKED_SEEDS};
use crate::network::seeds::{convert_seeds, load_hardcoded_seeds};

/// Expected hash of the main genesis block.
///
/// This is the double-SHA256 of the genesis header. The live network hashes
/// headers differently and pins
/// `a88595be18bc8c7531595bba1e99f579616d6d9b332aa20ce493559950d4c9a9`
/// for the same block; the merkle root is shared.
pub const MAIN_GENESIS_HASH: &str = "4731439cc72689f6b3a847b450d6296c45e53b41be82f05be6b4cba9ec8e0e1c";

/// Expected hash of the testnet genesis block.
pub const TESTNET_GENESIS_HASH: &str = "7741797795d2a5529f2fb538135ddb6b4b89db0e4fad48bc6583b88aff210a9a";

/// Expected merkle root of the genesis block. Both networks share the
/// genesis coinbase transaction.
pub const GENESIS_MERKLE_ROOT: &str = "776bdfeece04e73693cf0f765e5fce6fcd231a630dd54d4b4647d3b0efdc6f6d";

const MAIN_ALERT_KEY: [u8; 65] = [
    0x04, 0xd7, 0x2e, 0x52, 0xf9, 0x0d, 0x84, 0x71, 0xa4, 0xdb, 0xb3, 0x8b, 0xf3,
    0x80, 0xed, 0x83, 0x39, 0xe0, 0x75, 0x35, 0xbe, 0xe7, 0x4b, 0x43, 0xb5, 0xbe,
    0x48, 0xbd, 0xc8, 0x8d, 0xd6, 0xe1, 0xe7, 0x2e, 0xef, 0x1e, 0x85, 0xc1, 0x82,
    0xdf, 0xa9, 0x93, 0x12, 0x58, 0x1c, 0xfa, 0xde, 0x02, 0x8f, 0xa6, 0x72, 0x50,
    0x11, 0x66, 0x50, 0xfa, 0x52, 0x0e, 0x63, 0xf7, 0xb0, 0xe3, 0x05, 0xdd, 0x46,
];

const TESTNET_ALERT_KEY: [u8; 65] = [
    0x04, 0x8e, 0xd6, 0xde, 0xff, 0xe5, 0x71, 0xb6, 0xba, 0x5c, 0xd1, 0xa4, 0xee,
    0x0c, 0x3c, 0x8e, 0x3f, 0xc4, 0xb6, 0x1a, 0x2c, 0x35, 0xb4, 0x93, 0xde, 0xe5,
    0x91, 0xc5, 0x8f, 0xd1, 0xd8, 0xa8, 0xce, 0x8c, 0x0e, 0x42, 0x9a, 0xe0, 0xb7,
    0x0e, 0x60, 0xde, 0x47, 0xc6, 0x0e, 0x4a, 0x85, 0x85, 0x7d, 0x43, 0x00, 0xd0,
    0xfa, 0x67, 0x0e, 0x79, 0xfe, 0x16, 0x90, 0x5b, 0xcf, 0x65, 0xf9, 0xeb, 0xd2,
];

// Indexed by `Base58Type as usize`.
const MAIN_BASE58_PREFIXES: [&[u8]; 6] = [
    &[33],
    &[21],
    &[23],
    &[41],
    &[0x99, 0x75, 0x45, 0xe2],
    &[0x99, 0x73, 0x43, 0xe3],
];

const TESTNET_BASE58_PREFIXES: [&[u8]; 6] = [
    &[85],
    &[23],
    &[25],
    &[43],
    &[0x98, 0x74, 0x44, 0xe1],
    &[0x98, 0x72, 0x42, 0xe2],
];

const MAIN_DEFAULT_PORT: u16 = 21507;
const MAIN_RPC_PORT: u16 = 21508;
const TESTNET_DEFAULT_PORT: u16 = 23707;
const TESTNET_RPC_PORT: u16 = 23708;

/// Errors raised while building or selecting chain parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The computed genesis block hash differs from the expected one.
    #[error("{network} genesis block hash is {computed}, expected {expected}")]
    GenesisHashMismatch {
        /// Network being built
        network: Network,
        /// Expected hash
        expected: String,
        /// Hash computed from the genesis block
        computed: String,
    },
    /// The computed genesis merkle root differs from the expected one.
    #[error("{network} genesis merkle root is {computed}, expected {expected}")]
    GenesisMerkleRootMismatch {
        /// Network being built
        network: Network,
        /// Expected merkle root
        expected: String,
        /// Merkle root computed from the genesis transactions
        computed: String,
    },
    /// The alert key is not a valid public key.
    #[error("{network} alert key is not a valid public key")]
    InvalidAlertKey {
        /// Network being built
        network: Network,
        /// Parsing failure
        #[source]
        source: secp256k1::Error,
    },
    /// Two networks share a value that must tell them apart.
    #[error("{first} and {second} share the same {field}")]
    ParameterCollision {
        /// First network compared
        first: Network,
        /// Second network compared
        second: Network,
        /// The shared parameter
        field: &'static str,
    },
    /// No network is known by the requested name.
    #[error("unknown network {0:?}")]
    UnknownNetwork(String),
    /// The process-wide parameters were already selected for another network.
    #[error("{selected} parameters already selected, cannot switch to {requested}")]
    AlreadySelected {
        /// Network currently selected
        selected: Network,
        /// Network requested
        requested: Network,
    },
}

impl Error {
    /// Whether this error means the parameter tables themselves are corrupt,
    /// as opposed to a caller asking for something invalid.
    pub fn is_fatal(&self) -> bool {
        match *self {
            Error::GenesisHashMismatch { .. }
            | Error::GenesisMerkleRootMismatch { .. }
            | Error::InvalidAlertKey { .. }
            | Error::ParameterCollision { .. } => true,
            Error::UnknownNetwork(_) | Error::AlreadySelected { .. } => false,
        }
    }
}

impl From<ParseNetworkError> for Error {
    fn from(e: ParseNetworkError) -> Self {
        Error::UnknownNetwork(e.0)
    }
}

/// Kinds of base58 encoded data, each with its own version prefix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress = 0,
    /// Pay-to-script-hash address
    ScriptAddress = 1,
    /// Private key in wallet import format
    SecretKey = 2,
    /// Stealth address
    StealthAddress = 3,
    /// BIP32 extended public key
    ExtPublicKey = 4,
    /// BIP32 extended private key
    ExtSecretKey = 5,
}

impl Base58Type {
    /// Every kind, in table order.
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    /// Human readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Base58Type::PubkeyAddress => "pubkey address prefix",
            Base58Type::ScriptAddress => "script address prefix",
            Base58Type::SecretKey => "secret key prefix",
            Base58Type::StealthAddress => "stealth address prefix",
            Base58Type::ExtPublicKey => "extended public key prefix",
            Base58Type::ExtSecretKey => "extended secret key prefix",
        }
    }
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A DNS seed, resolved by the peer discovery layer.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DnsSeed {
    /// Short label of the seed
    pub name: String,
    /// Host name or address to resolve
    pub host: String,
}

impl DnsSeed {
    /// Creates a DNS seed entry.
    pub fn new(name: &str, host: &str) -> DnsSeed {
        DnsSeed {
            name: name.to_owned(),
            host: host.to_owned(),
        }
    }
}

/// The parameter set of one network.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    consensus: Params,
    message_start: [u8; 4],
    default_port: u16,
    rpc_port: u16,
    alert_key: PublicKey,
    base58_prefixes: [&'static [u8]; 6],
    genesis: Block,
    genesis_hash: BlockHash,
    fixed_seeds: Vec<Address>,
    dns_seeds: Vec<DnsSeed>,
    pool_max_transactions: u32,
    pool_dummy_address: &'static str,
    data_dir: Option<&'static str>,
}

fn parse_alert_key(network: Network, key: &[u8]) -> Result<PublicKey, Error> {
    PublicKey::from_slice(key).map_err(|source| {
        error!(%network, error = %source, "alert key rejected");
        Error::InvalidAlertKey { network, source }
    })
}

fn main_params() -> Result<ChainParams, Error> {
    let genesis = genesis_block(Network::Main);
    let mut fixed_seeds = convert_seeds(&MAIN_PACKED_SEEDS, MAIN_DEFAULT_PORT);
    fixed_seeds.extend(load_hardcoded_seeds(&MAIN_HARDCODED_SEEDS, MAIN_DEFAULT_PORT));

    Ok(ChainParams {
        consensus: Params::new(Network::Main),
        message_start: Network::Main.magic(),
        default_port: MAIN_DEFAULT_PORT,
        rpc_port: MAIN_RPC_PORT,
        alert_key: parse_alert_key(Network::Main, &MAIN_ALERT_KEY)?,
        base58_prefixes: MAIN_BASE58_PREFIXES,
        genesis_hash: genesis.block_hash(),
        genesis,
        fixed_seeds,
        dns_seeds: vec![
            DnsSeed::new("1", "206.189.71.184"),
            DnsSeed::new("2", "37.139.28.75"),
            DnsSeed::new("3", "138.68.4.151"),
        ],
        pool_max_transactions: 3,
        pool_dummy_address: "ENN69NtAnZrsnUUwWbrjPhuPm4JSmrxnNb",
        data_dir: None,
    })
}

fn testnet_params(main: ChainParams) -> Result<ChainParams, Error> {
    let genesis = genesis_block(Network::Testnet);

    Ok(ChainParams {
        consensus: Params::new(Network::Testnet),
        message_start: Network::Testnet.magic(),
        default_port: TESTNET_DEFAULT_PORT,
        rpc_port: TESTNET_RPC_PORT,
        alert_key: parse_alert_key(Network::Testnet, &TESTNET_ALERT_KEY)?,
        base58_prefixes: TESTNET_BASE58_PREFIXES,
        genesis_hash: genesis.block_hash(),
        genesis,
        fixed_seeds: convert_seeds(&TESTNET_PACKED_SEEDS, TESTNET_DEFAULT_PORT),
        dns_seeds: vec![],
        data_dir: Some(Network::Testnet.name()),
        ..main
    })
}

/// Derives checked testnet parameters from an already built main set.
pub(crate) fn testnet_from_main(main: ChainParams) -> Result<ChainParams, Error> {
    let testnet = testnet_params(main)?;
    testnet.check_genesis(TESTNET_GENESIS_HASH, GENESIS_MERKLE_ROOT)?;
    Ok(testnet)
}

impl ChainParams {
    /// Builds the parameter set of `network` and checks its genesis block
    /// against the expected hashes.
    pub fn new(network: Network) -> Result<ChainParams, Error> {
        let main = main_params()?;
        match network {
            Network::Main => {
                main.check_genesis(MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT)?;
                Ok(main)
            }
            Network::Testnet => testnet_from_main(main),
        }
    }

    /// Recomputes the genesis block hash and merkle root and compares them
    /// with the expected values, given in the usual reversed hex form.
    pub fn check_genesis(&self, expected_hash: &str, expected_merkle_root: &str) -> Result<(), Error> {
        let network = self.network();
        for tx in &self.genesis.txdata {
            debug!(%network, "genesis transaction: {}", tx);
        }

        let hash = self.genesis.block_hash().to_string();
        debug!(%network, %hash, "genesis block hash");
        if hash != expected_hash {
            error!(%network, %hash, expected = expected_hash, "genesis block hash mismatch");
            return Err(Error::GenesisHashMismatch {
                network,
                expected: expected_hash.to_owned(),
                computed: hash,
            });
        }

        let merkle_root = self
            .genesis
            .compute_merkle_root()
            .map(|root| root.to_string())
            .unwrap_or_default();
        debug!(%network, %merkle_root, "genesis merkle root");
        if merkle_root != expected_merkle_root || self.genesis.header.merkle_root.to_string() != merkle_root {
            error!(%network, %merkle_root, expected = expected_merkle_root, "genesis merkle root mismatch");
            return Err(Error::GenesisMerkleRootMismatch {
                network,
                expected: expected_merkle_root.to_owned(),
                computed: merkle_root,
            });
        }
        Ok(())
    }

    /// Checks that nothing identifying this network on the wire or in an
    /// encoded address is shared with `other`.
    pub fn check_distinct(&self, other: &ChainParams) -> Result<(), Error> {
        let collision = |field: &'static str| Error::ParameterCollision {
            first: self.network(),
            second: other.network(),
            field,
        };

        if self.message_start == other.message_start {
            return Err(collision("message start bytes"));
        }
        let ports = [self.default_port, self.rpc_port];
        if ports.contains(&other.default_port) || ports.contains(&other.rpc_port) {
            return Err(collision("port"));
        }
        for kind in Base58Type::ALL.iter() {
            if self.base58_prefix(*kind) == other.base58_prefix(*kind) {
                return Err(collision(kind.name()));
            }
        }
        Ok(())
    }

    /// The network these parameters are for.
    pub fn network(&self) -> Network {
        self.consensus.network
    }

    /// The consensus-layer view of these parameters.
    pub fn consensus(&self) -> &Params {
        &self.consensus
    }

    /// Bytes prefixing every peer-to-peer message.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Default peer-to-peer port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default RPC port.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// The easiest allowed proof of work target.
    pub fn pow_limit(&self) -> &Integer {
        &self.consensus.pow_limit
    }

    /// Key that signs network alerts.
    pub fn alert_key(&self) -> &PublicKey {
        &self.alert_key
    }

    /// Version prefix for base58 data of the given kind.
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes[kind as usize]
    }

    /// The first block of the chain.
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// Hash of the first block of the chain.
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// Seed peers compiled into the binary.
    pub fn fixed_seeds(&self) -> &[Address] {
        &self.fixed_seeds
    }

    /// Seeds for DNS-based peer discovery.
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Height of the last proof of work block.
    pub fn last_pow_block(&self) -> u32 {
        self.consensus.last_pow_block
    }

    /// Height of the first proof of stake block.
    pub fn pos_start_block(&self) -> u32 {
        self.consensus.pos_start_block
    }

    /// Maximum number of transactions in a mixing pool.
    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    /// Placeholder address used by the mixing pool.
    pub fn pool_dummy_address(&self) -> &str {
        self.pool_dummy_address
    }

    /// Subdirectory holding this network's data.
    pub fn data_dir(&self) -> &str {
        self.data_dir.unwrap_or_else(|| self.network().name())
    }
}

impl fmt::Display for ChainParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magic = &self.message_start;
        writeln!(f, "network:         {}", self.network())?;
        writeln!(f, "message start:   {:02x}{:02x}{:02x}{:02x}", magic[0], magic[1], magic[2], magic[3])?;
        writeln!(f, "ports:           p2p {}, rpc {}", self.default_port, self.rpc_port)?;
        writeln!(f, "pow limit bits:  0x{:08x}", self.consensus.pow_limit_bits())?;
        writeln!(f, "genesis hash:    {}", self.genesis_hash)?;
        writeln!(f, "merkle root:     {}", self.genesis.header.merkle_root)?;
        writeln!(f, "last pow block:  {}", self.last_pow_block())?;
        writeln!(f, "pos start block: {}", self.pos_start_block())?;
        for kind in Base58Type::ALL.iter() {
            write!(f, "{:<27}", format!("{}:", kind))?;
            for byte in self.base58_prefix(*kind) {
                write!(f, " {}", byte)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "fixed seeds:     {}", self.fixed_seeds.len())?;
        for seed in &self.dns_seeds {
            writeln!(f, "dns seed {}:      {}", seed.name, seed.host)?;
        }
        write!(f, "data dir:        {}", self.data_dir())
    }
}
