//! # Broadcom 577xx Ethernet link management
//!
//! PHY probing, autonegotiation, flow control resolution and MAC selection
//! for the internal SerDes/XGXS and the external PHYs found on 577xx boards.
//! Register access goes through [`ElinkHost`], which the surrounding driver provides.

use core::fmt;

mod elink_7101;
mod elink_8073;
mod elink_8705;
mod elink_8727;
mod elink_848xx;
mod elink_87x6;
mod elink_hw;
mod elink_internal;
mod elink_link;
mod elink_mac;
mod elink_operations;
mod elink_probe;
mod elink_sfp;

#[allow(dead_code)]
mod elink_regs;

#[cfg(test)]
mod elink_test_host;

pub use elink_7101::sfx7101_sp_sw_reset;
pub use elink_hw::{
    is_10g_speed, ChipId, Duplex, ElinkHost, EventLog, FeatureConfig, FlowCtrl, GpioIntMode,
    GpioMode, LedMode, LoopbackMode, MacType, MdioAccess, MediaType, MultiPhyConfig, PfcPortParams,
    Phy, PhyFlags, PhyIndex, PhyModeFlags, PhySelection, PhyType, Params, Supported, SwitchCfg,
    Vars, MAX_PHYS,
};
pub use elink_link::{
    common_init_phy, fan_failure_det_req, get_ext_phy_fw_version, hw_lock_required,
    hw_reset_phy, link_reset, link_status_update, link_update, phy_init, phy_read, phy_write,
    set_led, test_link,
};
pub use elink_mac::{
    ets_bw_limit, ets_disabled, ets_strict, pfc_statistic, update_pfc, PfcStatistic,
};
pub use elink_operations::{calc_ieee_aneg_adv, pause_resolve, PhyOperations, PhySpecificAction};
pub use elink_probe::phy_probe;
pub use elink_sfp::{handle_module_detect_int, init_mod_abs_int, read_sfp_module_eeprom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElinkDriverErr {
    Timeout,
    UnsupportedConfiguration,
    NoLink,
    HardwareFault,
    InvalidArgument,
    PhyNotFound,
}

impl fmt::Display for ElinkDriverErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Timeout => write!(f, "Hardware poll timed out."),
            Self::UnsupportedConfiguration => write!(f, "Unsupported configuration."),
            Self::NoLink => write!(f, "No link."),
            Self::HardwareFault => write!(f, "Hardware fault."),
            Self::InvalidArgument => write!(f, "Invalid argument."),
            Self::PhyNotFound => write!(f, "PHY not found."),
        }
    }
}
