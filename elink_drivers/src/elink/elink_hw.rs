use super::elink_regs::*;
use bitflags::bitflags;

pub const MAX_PHYS: usize = 3;
pub const LINK_CONFIG_SIZE: usize = 2;

pub const SPEED_AUTO_NEG: u16 = 0;
pub const SPEED_10: u16 = 10;
pub const SPEED_100: u16 = 100;
pub const SPEED_1000: u16 = 1000;
pub const SPEED_2500: u16 = 2500;
pub const SPEED_10000: u16 = 10000;
pub const SPEED_12000: u16 = 12000;
pub const SPEED_12500: u16 = 12500;
pub const SPEED_13000: u16 = 13000;
pub const SPEED_15000: u16 = 15000;
pub const SPEED_16000: u16 = 16000;

/// Fixed slot of a PHY inside `Params::phy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhyIndex {
    Internal = 0,
    External1 = 1,
    External2 = 2,
}

impl PhyIndex {
    pub const ALL: [PhyIndex; MAX_PHYS] =
        [PhyIndex::Internal, PhyIndex::External1, PhyIndex::External2];

    pub const EXTERNAL: [PhyIndex; 2] = [PhyIndex::External1, PhyIndex::External2];

    #[inline(always)]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Index into the per-port requested link configuration.
    /// The internal PHY and the first external PHY share slot 0.
    pub fn link_config_idx(self) -> usize {
        match self {
            PhyIndex::Internal | PhyIndex::External1 => 0,
            PhyIndex::External2 => 1,
        }
    }

    /// Array slot that holds this logical PHY when the swap bit is set.
    pub fn swapped(self, swapped: bool) -> PhyIndex {
        match (self, swapped) {
            (PhyIndex::External1, true) => PhyIndex::External2,
            (PhyIndex::External2, true) => PhyIndex::External1,
            (idx, _) => idx,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhyType {
    NotConnected,
    Failure,
    Serdes,
    Xgxs,
    Sfx7101,
    Bcm8073,
    Bcm8705,
    Bcm8706,
    Bcm8726,
    Bcm8727,
    Bcm8481,
    Bcm84823,
    Bcm84833,
}

impl PhyType {
    pub fn is_internal(&self) -> bool {
        matches!(self, PhyType::Serdes | PhyType::Xgxs)
    }

    /// Decode the type field of an XGXS `external_phy_config` word.
    /// The second result is set for the no-over-current variant of the 8727.
    pub fn from_ext_phy_config(config: u32) -> (Self, bool) {
        let phy_type = match config & PORT_HW_CFG_XGXS_EXT_PHY_TYPE_MASK {
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073 => PhyType::Bcm8073,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8705 => PhyType::Bcm8705,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8706 => PhyType::Bcm8706,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8726 => PhyType::Bcm8726,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727
            | PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727_NOC
            | PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8722 => PhyType::Bcm8727,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8481 => PhyType::Bcm8481,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84823 => PhyType::Bcm84823,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84833 => PhyType::Bcm84833,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_SFX7101 => PhyType::Sfx7101,
            PORT_HW_CFG_XGXS_EXT_PHY_TYPE_FAILURE => PhyType::Failure,
            // Unknown chips leave the slot empty.
            _ => PhyType::NotConnected,
        };

        let noc = config & PORT_HW_CFG_XGXS_EXT_PHY_TYPE_MASK
            == PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727_NOC;
        (phy_type, noc)
    }

    /// Type code the management firmware uses for this chip.
    pub fn ext_phy_type_code(&self) -> u32 {
        match self {
            PhyType::NotConnected => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_NOT_CONN,
            PhyType::Failure => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_FAILURE,
            PhyType::Serdes | PhyType::Xgxs => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_DIRECT,
            PhyType::Sfx7101 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_SFX7101,
            PhyType::Bcm8073 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073,
            PhyType::Bcm8705 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8705,
            PhyType::Bcm8706 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8706,
            PhyType::Bcm8726 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8726,
            PhyType::Bcm8727 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727,
            PhyType::Bcm8481 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8481,
            PhyType::Bcm84823 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84823,
            PhyType::Bcm84833 => PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84833,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Auto,
    Tx,
    Rx,
    Both,
    None,
}

impl FlowCtrl {
    pub fn from_pause(tx: bool, rx: bool) -> Self {
        match (tx, rx) {
            (true, true) => FlowCtrl::Both,
            (true, false) => FlowCtrl::Tx,
            (false, true) => FlowCtrl::Rx,
            (false, false) => FlowCtrl::None,
        }
    }

    pub fn tx(&self) -> bool {
        matches!(self, FlowCtrl::Tx | FlowCtrl::Both)
    }

    pub fn rx(&self) -> bool {
        matches!(self, FlowCtrl::Rx | FlowCtrl::Both)
    }

    /// Decode the flow control field of a persisted link_config word.
    pub fn from_link_config(link_config: u32) -> Self {
        match link_config & PORT_FEATURE_FLOW_CONTROL_MASK {
            PORT_FEATURE_FLOW_CONTROL_AUTO => FlowCtrl::Auto,
            PORT_FEATURE_FLOW_CONTROL_TX => FlowCtrl::Tx,
            PORT_FEATURE_FLOW_CONTROL_RX => FlowCtrl::Rx,
            PORT_FEATURE_FLOW_CONTROL_BOTH => FlowCtrl::Both,
            _ => FlowCtrl::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplex {
    Half,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopbackMode {
    None,
    Emac,
    Bmac,
    Xgxs,
    ExtPhy,
    Ext,
    Umac,
    Xmac,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    Off,
    On,
    Oper,
    FrontPanelOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCfg {
    Switch1G,
    Switch10G,
    AutoDetect,
    OneTimeDetect,
}

impl SwitchCfg {
    pub fn from_link_config(link_config: u32) -> Self {
        match link_config & PORT_FEATURE_CONNECTED_SWITCH_MASK {
            PORT_FEATURE_CON_SWITCH_1G_SWITCH => SwitchCfg::Switch1G,
            PORT_FEATURE_CON_SWITCH_10G_SWITCH => SwitchCfg::Switch10G,
            PORT_FEATURE_CON_SWITCH_AUTO_DETECT => SwitchCfg::AutoDetect,
            _ => SwitchCfg::OneTimeDetect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhySelection {
    HardwareDefault,
    FirstPhy,
    SecondPhy,
    FirstPhyPriority,
    SecondPhyPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiPhyConfig {
    pub selection: PhySelection,
    pub swapped: bool,
}

impl MultiPhyConfig {
    pub fn from_raw(raw: u32) -> Self {
        let selection = match raw & PORT_HW_CFG_PHY_SELECTION_MASK {
            PORT_HW_CFG_PHY_SELECTION_FIRST_PHY => PhySelection::FirstPhy,
            PORT_HW_CFG_PHY_SELECTION_SECOND_PHY => PhySelection::SecondPhy,
            PORT_HW_CFG_PHY_SELECTION_FIRST_PHY_PRIORITY => PhySelection::FirstPhyPriority,
            PORT_HW_CFG_PHY_SELECTION_SECOND_PHY_PRIORITY => PhySelection::SecondPhyPriority,
            _ => PhySelection::HardwareDefault,
        };

        Self {
            selection,
            swapped: raw & PORT_HW_CFG_PHY_SWAPPED_ENABLED != 0,
        }
    }

    /// phy_selection - Selection policy as seen from the logical PHY roles
    ///
    /// When the swap bit is set the first/second roles are exchanged.
    pub fn phy_selection(&self) -> PhySelection {
        if !self.swapped {
            return self.selection;
        }

        match self.selection {
            PhySelection::FirstPhyPriority => PhySelection::SecondPhyPriority,
            PhySelection::SecondPhyPriority => PhySelection::FirstPhyPriority,
            PhySelection::SecondPhy => PhySelection::FirstPhy,
            PhySelection::FirstPhy => PhySelection::SecondPhy,
            PhySelection::HardwareDefault => PhySelection::HardwareDefault,
        }
    }
}

impl Default for MultiPhyConfig {
    fn default() -> Self {
        Self {
            selection: PhySelection::HardwareDefault,
            swapped: false,
        }
    }
}

/// Which EMAC's MDC/MDIO pins reach a PHY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MdioAccess {
    PhyType,
    Emac0,
    Emac1,
    Both,
    Swapped,
}

impl MdioAccess {
    /// Decode the ACCESS1 field of shared_hw_config.config2.
    pub fn from_config2_access1(config2: u32) -> Option<Self> {
        Self::from_field(config2 & SHARED_HW_CFG_MDC_MDIO_ACCESS1_MASK)
    }

    /// Decode the ACCESS2 field of shared_hw_config.config2.
    pub fn from_config2_access2(config2: u32) -> Option<Self> {
        Self::from_field(
            (config2 & SHARED_HW_CFG_MDC_MDIO_ACCESS2_MASK)
                >> (SHARED_HW_CFG_MDC_MDIO_ACCESS2_SHIFT - SHARED_HW_CFG_MDC_MDIO_ACCESS1_SHIFT),
        )
    }

    fn from_field(field: u32) -> Option<Self> {
        match field {
            SHARED_HW_CFG_MDC_MDIO_ACCESS1_PHY_TYPE => None,
            SHARED_HW_CFG_MDC_MDIO_ACCESS1_EMAC0 => Some(MdioAccess::Emac0),
            SHARED_HW_CFG_MDC_MDIO_ACCESS1_EMAC1 => Some(MdioAccess::Emac1),
            SHARED_HW_CFG_MDC_MDIO_ACCESS1_BOTH => Some(MdioAccess::Both),
            SHARED_HW_CFG_MDC_MDIO_ACCESS1_SWAPPED => Some(MdioAccess::Swapped),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacType {
    None,
    Emac,
    Bmac,
}

impl MacType {
    /// MAC family that carries a given line speed.
    pub fn for_speed(line_speed: u16) -> Self {
        match line_speed {
            SPEED_10 | SPEED_100 | SPEED_1000 | SPEED_2500 => MacType::Emac,
            SPEED_10000 | SPEED_12000 | SPEED_12500 | SPEED_13000 | SPEED_15000 | SPEED_16000 => {
                MacType::Bmac
            }
            _ => MacType::None,
        }
    }
}

pub fn is_10g_speed(line_speed: u16) -> bool {
    MacType::for_speed(line_speed) == MacType::Bmac
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Unspecified,
    SfpFiber,
    XfpFiber,
    DaTwinax,
    BaseT,
    Kr,
    Cx4,
    NotPresent,
}

impl MediaType {
    pub fn as_raw(&self) -> u32 {
        match self {
            MediaType::Unspecified => 0x0,
            MediaType::SfpFiber => 0x1,
            MediaType::XfpFiber => 0x2,
            MediaType::DaTwinax => 0x3,
            MediaType::BaseT => 0x4,
            MediaType::Kr => 0xf0,
            MediaType::Cx4 => 0xf1,
            MediaType::NotPresent => 0xff,
        }
    }

    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0x1 => MediaType::SfpFiber,
            0x2 => MediaType::XfpFiber,
            0x3 => MediaType::DaTwinax,
            0x4 => MediaType::BaseT,
            0xf0 => MediaType::Kr,
            0xf1 => MediaType::Cx4,
            0xff => MediaType::NotPresent,
            _ => MediaType::Unspecified,
        }
    }

    /// Media that terminates on the serdes side of an external PHY.
    pub fn is_serdes(&self) -> bool {
        matches!(
            self,
            MediaType::SfpFiber | MediaType::XfpFiber | MediaType::DaTwinax
        )
    }
}

/// Chip identifier in the MISC_REG_CHIP_NUM/REV layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipId(pub u32);

impl ChipId {
    pub fn num(&self) -> u32 {
        self.0 >> 16
    }

    pub fn rev(&self) -> u32 {
        (self.0 & CHIP_REV_MASK) >> CHIP_REV_SHIFT
    }

    pub fn is_e1(&self) -> bool {
        self.num() == CHIP_NUM_57710
    }

    pub fn is_e1h(&self) -> bool {
        self.num() == CHIP_NUM_57711 || self.num() == CHIP_NUM_57711E
    }

    pub fn is_e1x(&self) -> bool {
        self.is_e1() || self.is_e1h()
    }

    pub fn is_e2(&self) -> bool {
        matches!(
            self.num(),
            CHIP_NUM_57712 | CHIP_NUM_57712_MF | CHIP_NUM_57712_VF
        )
    }

    pub fn is_emul(&self) -> bool {
        self.rev() == CHIP_REV_EMUL
    }

    pub fn is_fpga(&self) -> bool {
        self.rev() == CHIP_REV_FPGA
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PhyFlags: u16 {
        const HW_LOCK_REQUIRED = 1 << 0;
        const NOC = 1 << 1;
        const FAN_FAILURE_DET_REQ = 1 << 2;
        const INIT_XGXS_FIRST = 1 << 3;
        const REARM_LATCH_SIGNAL = 1 << 6;
        const SFP_NOT_APPROVED = 1 << 7;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Supported: u32 {
        const T10_HALF = 1 << 0;
        const T10_FULL = 1 << 1;
        const T100_HALF = 1 << 2;
        const T100_FULL = 1 << 3;
        const T1000_HALF = 1 << 4;
        const T1000_FULL = 1 << 5;
        const AUTONEG = 1 << 6;
        const TP = 1 << 7;
        const FIBRE = 1 << 10;
        const T10000_FULL = 1 << 12;
        const PAUSE = 1 << 13;
        const ASYM_PAUSE = 1 << 14;
        const X2500_FULL = 1 << 15;
    }

    /// Operating mode of the internal PHY for the current link.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PhyModeFlags: u8 {
        const XGXS = 0x1;
        const SGMII = 0x2;
        const SERDES = 0x4;
    }
}

/// Independent feature toggles decoded from the persisted feature words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureConfig {
    pub override_preemphasis: bool,
    pub pfc_enabled: bool,
    pub bc_supports_opt_mdl_vrfy: bool,
    pub bc_supports_dual_phy_opt_mdl_vrfy: bool,
    pub bc_supports_vntag: bool,
    pub emul_disable_emac: bool,
    pub emul_disable_bmac: bool,
}

/// Priority flow control overrides supplied per `update_pfc` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PfcPortParams {
    pub pause_enable: u32,
    pub llfc_out_en: u32,
    pub llfc_enable: u32,
    pub pkt_priority_to_cos: u32,
    pub rx_cos0_priority_mask: u32,
    pub rx_cos1_priority_mask: u32,
    pub llfc_high_priority_classes: u32,
    pub llfc_low_priority_classes: u32,
    pub cos0_pauseable: bool,
    pub cos1_pauseable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phy {
    pub phy_type: PhyType,
    pub addr: u8,
    pub flags: PhyFlags,
    pub def_md_devad: u8,
    pub rx_preemphasis: [u16; 4],
    pub tx_preemphasis: [u16; 4],

    /// Base of the EMAC block whose MDIO master reaches this PHY.
    pub mdio_ctrl: u32,
    pub supported: Supported,
    pub media_type: MediaType,
    pub ver_addr: u32,
    pub req_flow_ctrl: FlowCtrl,
    pub req_line_speed: u16,
    pub speed_cap_mask: u32,
    pub req_duplex: Duplex,
}

impl Phy {
    /// The sentinel stored in every unused slot.
    pub const fn null() -> Self {
        Self {
            phy_type: PhyType::NotConnected,
            addr: 0,
            flags: PhyFlags::INIT_XGXS_FIRST,
            def_md_devad: 0,
            rx_preemphasis: [0xffff; 4],
            tx_preemphasis: [0xffff; 4],
            mdio_ctrl: 0,
            supported: Supported::empty(),
            media_type: MediaType::NotPresent,
            ver_addr: 0,
            req_flow_ctrl: FlowCtrl::Auto,
            req_line_speed: SPEED_AUTO_NEG,
            speed_cap_mask: 0,
            req_duplex: Duplex::Full,
        }
    }

    /// Template of a chip family with the capability set it ships with.
    /// Address, routing and preemphasis are filled in by the probe.
    pub fn template(phy_type: PhyType) -> Self {
        let base_t_all = Supported::T10_HALF
            | Supported::T10_FULL
            | Supported::T100_HALF
            | Supported::T100_FULL
            | Supported::T1000_FULL
            | Supported::T10000_FULL
            | Supported::TP
            | Supported::AUTONEG
            | Supported::PAUSE
            | Supported::ASYM_PAUSE;

        let (flags, supported, media_type) = match phy_type {
            PhyType::NotConnected | PhyType::Failure => return Self::null(),
            PhyType::Serdes => (
                PhyFlags::empty(),
                Supported::T10_HALF
                    | Supported::T10_FULL
                    | Supported::T100_HALF
                    | Supported::T100_FULL
                    | Supported::T1000_FULL
                    | Supported::X2500_FULL
                    | Supported::TP
                    | Supported::AUTONEG
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::BaseT,
            ),
            PhyType::Xgxs => (
                PhyFlags::empty(),
                Supported::T10_HALF
                    | Supported::T10_FULL
                    | Supported::T100_HALF
                    | Supported::T100_FULL
                    | Supported::T1000_FULL
                    | Supported::X2500_FULL
                    | Supported::T10000_FULL
                    | Supported::FIBRE
                    | Supported::AUTONEG
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::Cx4,
            ),
            PhyType::Sfx7101 => (
                PhyFlags::FAN_FAILURE_DET_REQ,
                Supported::T10000_FULL
                    | Supported::TP
                    | Supported::AUTONEG
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::BaseT,
            ),
            PhyType::Bcm8073 => (
                PhyFlags::HW_LOCK_REQUIRED,
                Supported::T10000_FULL
                    | Supported::X2500_FULL
                    | Supported::T1000_FULL
                    | Supported::FIBRE
                    | Supported::AUTONEG
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::Kr,
            ),
            PhyType::Bcm8705 => (
                PhyFlags::INIT_XGXS_FIRST,
                Supported::T10000_FULL
                    | Supported::FIBRE
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::XfpFiber,
            ),
            PhyType::Bcm8706 => (
                PhyFlags::INIT_XGXS_FIRST,
                Supported::T10000_FULL
                    | Supported::T1000_FULL
                    | Supported::FIBRE
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::SfpFiber,
            ),
            PhyType::Bcm8726 => (
                PhyFlags::HW_LOCK_REQUIRED | PhyFlags::INIT_XGXS_FIRST,
                Supported::T10000_FULL
                    | Supported::T1000_FULL
                    | Supported::AUTONEG
                    | Supported::FIBRE
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::NotPresent,
            ),
            PhyType::Bcm8727 => (
                PhyFlags::FAN_FAILURE_DET_REQ,
                Supported::T10000_FULL
                    | Supported::T1000_FULL
                    | Supported::FIBRE
                    | Supported::PAUSE
                    | Supported::ASYM_PAUSE,
                MediaType::NotPresent,
            ),
            PhyType::Bcm8481 | PhyType::Bcm84823 | PhyType::Bcm84833 => (
                PhyFlags::FAN_FAILURE_DET_REQ | PhyFlags::REARM_LATCH_SIGNAL,
                base_t_all,
                MediaType::BaseT,
            ),
        };

        Self {
            phy_type,
            addr: 0xff,
            flags,
            supported,
            media_type,
            ..Self::null()
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.phy_type, PhyType::NotConnected | PhyType::Failure)
    }
}

impl Default for Phy {
    fn default() -> Self {
        Self::null()
    }
}

/// Per-port configuration and identity.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub port: u8,
    pub loopback_mode: LoopbackMode,
    pub mac_addr: [u8; 6],
    pub req_duplex: [Duplex; LINK_CONFIG_SIZE],
    pub req_flow_ctrl: [FlowCtrl; LINK_CONFIG_SIZE],
    pub req_line_speed: [u16; LINK_CONFIG_SIZE],
    pub speed_cap_mask: [u32; LINK_CONFIG_SIZE],
    pub shmem_base: u32,
    pub shmem2_base: u32,
    pub switch_cfg: SwitchCfg,
    pub lane_config: u32,
    pub chip_id: ChipId,
    pub feature_config: FeatureConfig,
    pub phy: [Phy; MAX_PHYS],
    pub num_phys: u8,
    pub hw_led_mode: u8,
    pub multi_phy_config: MultiPhyConfig,

    /// Pause advertisement used while a PHY requests `FlowCtrl::Auto`.
    pub req_fc_auto_adv: FlowCtrl,
}

impl Params {
    pub fn new(port: u8, shmem_base: u32, shmem2_base: u32) -> Self {
        Self {
            port,
            loopback_mode: LoopbackMode::None,
            mac_addr: [0; 6],
            req_duplex: [Duplex::Full; LINK_CONFIG_SIZE],
            req_flow_ctrl: [FlowCtrl::Auto; LINK_CONFIG_SIZE],
            req_line_speed: [SPEED_AUTO_NEG; LINK_CONFIG_SIZE],
            speed_cap_mask: [0; LINK_CONFIG_SIZE],
            shmem_base,
            shmem2_base,
            switch_cfg: SwitchCfg::Switch10G,
            lane_config: 0,
            chip_id: ChipId::default(),
            feature_config: FeatureConfig::default(),
            phy: [Phy::null(); MAX_PHYS],
            num_phys: 0,
            hw_led_mode: 0,
            multi_phy_config: MultiPhyConfig::default(),
            req_fc_auto_adv: FlowCtrl::Both,
        }
    }

    #[inline(always)]
    pub fn phy(&self, idx: PhyIndex) -> &Phy {
        &self.phy[idx.idx()]
    }

    #[inline(always)]
    pub fn phy_mut(&mut self, idx: PhyIndex) -> &mut Phy {
        &mut self.phy[idx.idx()]
    }

    /// Slots that hold a populated PHY, internal first.
    pub fn populated(&self) -> impl Iterator<Item = PhyIndex> {
        let num = self.num_phys as usize;
        PhyIndex::ALL.into_iter().take(num)
    }

    /// A board without any external PHY.
    pub fn single_media(&self) -> bool {
        self.num_phys == 1
    }

    /// Both external slots populated.
    pub fn dual_media(&self) -> bool {
        self.num_phys == 3
    }

    /// Shared memory address of a `port_hw_config` word of this port.
    pub fn port_hw_addr(&self, offset: u32) -> u32 {
        self.shmem_base + offset + self.port as u32 * SHMEM_PORT_HW_CONFIG_STRIDE
    }

    /// Shared memory address of a `port_feature_config` word of this port.
    pub fn port_feature_addr(&self, offset: u32) -> u32 {
        self.shmem_base + offset + self.port as u32 * SHMEM_PORT_FEATURE_STRIDE
    }

    /// Shared memory address of a `port_mb` word of this port.
    pub fn port_mb_addr(&self, offset: u32) -> u32 {
        self.shmem_base + offset + self.port as u32 * SHMEM_PORT_MB_STRIDE
    }

    /// Index of the first slot holding a PHY of `phy_type` at `addr`.
    pub fn phy_index_of(&self, phy: &Phy) -> Option<PhyIndex> {
        PhyIndex::ALL.into_iter().find(|idx| {
            let p = self.phy(*idx);
            p.phy_type == phy.phy_type && p.addr == phy.addr
        })
    }

    /// Port used for GPIOs shared by both ports of a path.
    pub fn gpio_port(&self, host: &dyn ElinkHost) -> u8 {
        if self.chip_id.is_e2() {
            host.path_id()
        } else {
            self.port
        }
    }

    pub fn master_lane(&self) -> u16 {
        ((self.lane_config & PORT_HW_CFG_LANE_SWAP_CFG_MASTER_MASK)
            >> PORT_HW_CFG_LANE_SWAP_CFG_MASTER_SHIFT) as u16
    }

    pub fn rx_lane_swap(&self) -> u16 {
        ((self.lane_config & PORT_HW_CFG_LANE_SWAP_CFG_RX_MASK)
            >> PORT_HW_CFG_LANE_SWAP_CFG_RX_SHIFT) as u16
    }

    pub fn tx_lane_swap(&self) -> u16 {
        ((self.lane_config & PORT_HW_CFG_LANE_SWAP_CFG_TX_MASK)
            >> PORT_HW_CFG_LANE_SWAP_CFG_TX_SHIFT) as u16
    }
}

/// Observed link state of a port, recomputed on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vars {
    pub phy_flags: PhyModeFlags,
    pub mac_type: MacType,
    pub phy_link_up: bool,
    pub link_up: bool,
    pub line_speed: u16,
    pub duplex: Duplex,
    pub flow_ctrl: FlowCtrl,
    pub ieee_fc: u16,

    /// Mirror of `port_mb[port].link_status` in shared memory.
    pub link_status: u32,
    pub fault_detected: bool,
    pub aeu_int_mask: u32,
}

impl Vars {
    pub fn new() -> Self {
        Self {
            phy_flags: PhyModeFlags::empty(),
            mac_type: MacType::None,
            phy_link_up: false,
            link_up: false,
            line_speed: 0,
            duplex: Duplex::Full,
            flow_ctrl: FlowCtrl::None,
            ieee_fc: 0,
            link_status: 0,
            fault_detected: false,
            aeu_int_mask: 0,
        }
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    OutputLow,
    OutputHigh,
    InputHiZ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioIntMode {
    OutputClear,
    OutputSet,
}

/// Diagnostic events reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLog {
    UnqualifiedIoModule {
        port: u8,
        vendor_name: [u8; SFP_EEPROM_VENDOR_NAME_SIZE],
        vendor_pn: [u8; SFP_EEPROM_PART_NO_SIZE],
    },
    OverCurrent {
        port: u8,
    },
    PhyUninitialized {
        port: u8,
    },
    MdioAccessTimeout,
}

/// Capabilities the link core needs from the surrounding driver.
pub trait ElinkHost {
    fn reg_read(&mut self, addr: u32) -> u32;
    fn reg_write(&mut self, addr: u32, val: u32);
    fn reg_block_read(&mut self, addr: u32, buf: &mut [u32]);
    fn reg_block_write(&mut self, addr: u32, buf: &[u32]);
    fn gpio_write(&mut self, pin: u8, mode: GpioMode, port: u8);
    fn gpio_read(&mut self, pin: u8, port: u8) -> u32;
    fn gpio_int_write(&mut self, pin: u8, mode: GpioIntMode, port: u8);
    fn udelay(&mut self, usecs: u32);
    fn firmware_command(&mut self, command: u32, param: u32) -> u32;
    fn event_log(&mut self, event: EventLog);
    fn path_id(&self) -> u8;
}

#[inline(always)]
pub fn msleep(host: &mut dyn ElinkHost, msecs: u32) {
    host.udelay(msecs * 1000);
}

pub fn bits_en(host: &mut dyn ElinkHost, reg: u32, bits: u32) -> u32 {
    let val = host.reg_read(reg) | bits;
    host.reg_write(reg, val);
    val
}

pub fn bits_dis(host: &mut dyn ElinkHost, reg: u32, bits: u32) -> u32 {
    let val = host.reg_read(reg) & !bits;
    host.reg_write(reg, val);
    val
}

/// Decode the requested speed and duplex of a persisted link_config word.
pub fn link_config_speed(link_config: u32) -> (u16, Duplex) {
    match link_config & PORT_FEATURE_LINK_SPEED_MASK {
        PORT_FEATURE_LINK_SPEED_10M_HALF => (SPEED_10, Duplex::Half),
        PORT_FEATURE_LINK_SPEED_10M_FULL => (SPEED_10, Duplex::Full),
        PORT_FEATURE_LINK_SPEED_100M_HALF => (SPEED_100, Duplex::Half),
        PORT_FEATURE_LINK_SPEED_100M_FULL => (SPEED_100, Duplex::Full),
        PORT_FEATURE_LINK_SPEED_1G => (SPEED_1000, Duplex::Full),
        PORT_FEATURE_LINK_SPEED_2_5G => (SPEED_2500, Duplex::Full),
        PORT_FEATURE_LINK_SPEED_10G_CX4 => (SPEED_10000, Duplex::Full),
        _ => (SPEED_AUTO_NEG, Duplex::Full),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_type_for_speed() {
        for speed in [SPEED_10, SPEED_100, SPEED_1000, SPEED_2500] {
            assert_eq!(MacType::for_speed(speed), MacType::Emac);
        }

        for speed in [
            SPEED_10000,
            SPEED_12000,
            SPEED_12500,
            SPEED_13000,
            SPEED_15000,
            SPEED_16000,
        ] {
            assert_eq!(MacType::for_speed(speed), MacType::Bmac);
        }

        assert_eq!(MacType::for_speed(0), MacType::None);
        assert_eq!(MacType::for_speed(5000), MacType::None);
    }

    #[test]
    fn test_phy_selection_swapped() {
        let cfg = MultiPhyConfig::from_raw(
            PORT_HW_CFG_PHY_SELECTION_FIRST_PHY_PRIORITY | PORT_HW_CFG_PHY_SWAPPED_ENABLED,
        );
        assert!(cfg.swapped);
        assert_eq!(cfg.selection, PhySelection::FirstPhyPriority);
        assert_eq!(cfg.phy_selection(), PhySelection::SecondPhyPriority);

        let cfg = MultiPhyConfig::from_raw(PORT_HW_CFG_PHY_SELECTION_SECOND_PHY);
        assert_eq!(cfg.phy_selection(), PhySelection::SecondPhy);
    }

    #[test]
    fn test_link_config_idx() {
        assert_eq!(PhyIndex::Internal.link_config_idx(), 0);
        assert_eq!(PhyIndex::External1.link_config_idx(), 0);
        assert_eq!(PhyIndex::External2.link_config_idx(), 1);
        assert_eq!(PhyIndex::External1.swapped(true), PhyIndex::External2);
        assert_eq!(PhyIndex::Internal.swapped(true), PhyIndex::Internal);
    }

    #[test]
    fn test_flow_ctrl_decode() {
        assert_eq!(
            FlowCtrl::from_link_config(PORT_FEATURE_FLOW_CONTROL_BOTH),
            FlowCtrl::Both
        );
        assert_eq!(
            FlowCtrl::from_link_config(PORT_FEATURE_FLOW_CONTROL_NONE),
            FlowCtrl::None
        );
        assert!(FlowCtrl::Both.tx() && FlowCtrl::Both.rx());
        assert!(!FlowCtrl::Auto.tx());
        assert_eq!(FlowCtrl::from_pause(false, true), FlowCtrl::Rx);
    }
}
