// Chip identification
pub const CHIP_NUM_57710: u32 = 0x164e;
pub const CHIP_NUM_57711: u32 = 0x164f;
pub const CHIP_NUM_57711E: u32 = 0x1650;
pub const CHIP_NUM_57712: u32 = 0x1662;
pub const CHIP_NUM_57712_MF: u32 = 0x1663;
pub const CHIP_NUM_57712_VF: u32 = 0x166f;
pub const CHIP_REV_MASK: u32 = 0x0000f000;
pub const CHIP_REV_SHIFT: u32 = 12;
pub const CHIP_REV_EMUL: u32 = 0xe;
pub const CHIP_REV_FPGA: u32 = 0xf;

pub const DEFAULT_PHY_DEV_ADDR: u8 = 3;
pub const E2_DEFAULT_PHY_DEV_ADDR: u8 = 5;

pub const MDIO_ACCESS_TIMEOUT: u32 = 1000;
pub const ETH_MAX_JUMBO_PACKET_SIZE: u32 = 9600;
pub const ETH_HLEN: u32 = 14;
pub const ETH_OVERHEAD: u32 = ETH_HLEN + 8 + 8;
pub const ETH_MAX_PACKET_SIZE: u32 = 1500;
pub const LED_BLINK_RATE_VAL: u32 = 480;

// Shared memory layout, offsets relative to shmem_base.
pub const SHMEM_SHARED_HW_CONFIG_CONFIG: u32 = 0x1c;
pub const SHMEM_SHARED_HW_CONFIG_CONFIG2: u32 = 0x20;
pub const SHMEM_SHARED_HW_CONFIG_BOARD: u32 = 0x2c;
pub const SHMEM_SHARED_FEATURE_CONFIG: u32 = 0x354;

pub const SHMEM_PORT_HW_CONFIG_STRIDE: u32 = 0x190;
pub const SHMEM_PORT_HW_SFP_CTRL: u32 = 0x6c;
pub const SHMEM_PORT_HW_E3_SFP_CTRL: u32 = 0x70;
pub const SHMEM_PORT_HW_AEU_INT_MASK: u32 = 0x98;
pub const SHMEM_PORT_HW_MEDIA_TYPE: u32 = 0x9c;
pub const SHMEM_PORT_HW_XGXS_CONFIG_RX: u32 = 0xa0;
pub const SHMEM_PORT_HW_XGXS_CONFIG_TX: u32 = 0xa8;
pub const SHMEM_PORT_HW_DEFAULT_CFG: u32 = 0x190;
pub const SHMEM_PORT_HW_SPEED_CAP_MASK2: u32 = 0x194;
pub const SHMEM_PORT_HW_MULTI_PHY_CONFIG: u32 = 0x198;
pub const SHMEM_PORT_HW_EXT_PHY_CONFIG2: u32 = 0x19c;
pub const SHMEM_PORT_HW_XGXS_CONFIG2_RX: u32 = 0x1a0;
pub const SHMEM_PORT_HW_XGXS_CONFIG2_TX: u32 = 0x1a8;
pub const SHMEM_PORT_HW_LANE_CONFIG: u32 = 0x1b0;
pub const SHMEM_PORT_HW_EXT_PHY_CONFIG: u32 = 0x1b4;
pub const SHMEM_PORT_HW_SPEED_CAP_MASK: u32 = 0x1b8;

pub const SHMEM_PORT_FEATURE_STRIDE: u32 = 0x74;
pub const SHMEM_PORT_FEATURE_CONFIG: u32 = 0x358;
pub const SHMEM_PORT_FEATURE_MBA_CONFIG: u32 = 0x360;
pub const SHMEM_PORT_FEATURE_LINK_CONFIG: u32 = 0x378;
pub const SHMEM_PORT_FEATURE_LINK_CONFIG2: u32 = 0x380;

pub const SHMEM_PORT_MB_STRIDE: u32 = 0x10;
pub const SHMEM_PORT_MB_LINK_STATUS: u32 = 0x664;
pub const SHMEM_PORT_MB_EXT_PHY_FW_VERSION: u32 = 0x670;

// Offsets relative to shmem2_base.
pub const SHMEM2_SIZE: u32 = 0x0;
pub const SHMEM2_EXT_PHY_FW_VERSION2: u32 = 0x8;

// shared_hw_config.config
pub const SHARED_HW_CFG_LED_MODE_MASK: u32 = 0x000f0000;
pub const SHARED_HW_CFG_LED_MODE_SHIFT: u32 = 16;
pub const SHARED_HW_CFG_LED_MAC1: u32 = 0x00000000;
pub const SHARED_HW_CFG_LED_PHY1: u32 = 0x00010000;
pub const SHARED_HW_CFG_LED_EXTPHY1: u32 = 0x000e0000;
pub const SHARED_HW_CFG_LED_EXTPHY2: u32 = 0x000f0000;

// shared_hw_config.config2
pub const SHARED_HW_CFG_FAN_FAILURE_MASK: u32 = 0x00180000;
pub const SHARED_HW_CFG_FAN_FAILURE_PHY_TYPE: u32 = 0x00000000;
pub const SHARED_HW_CFG_FAN_FAILURE_DISABLED: u32 = 0x00080000;
pub const SHARED_HW_CFG_FAN_FAILURE_ENABLED: u32 = 0x00100000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_MASK: u32 = 0x1c000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_SHIFT: u32 = 26;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_PHY_TYPE: u32 = 0x00000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_EMAC0: u32 = 0x04000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_EMAC1: u32 = 0x08000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_BOTH: u32 = 0x0c000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS1_SWAPPED: u32 = 0x10000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS2_MASK: u32 = 0xe0000000;
pub const SHARED_HW_CFG_MDC_MDIO_ACCESS2_SHIFT: u32 = 29;

// shared_hw_config.board / shared_feature_config
pub const SHARED_FEAT_CFG_OVERRIDE_PREEMPHASIS_ENABLED: u32 = 0x00000002;

// port_hw_config.speed_capability_mask
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_MASK: u32 = 0xffff0000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_10M_FULL: u32 = 0x00010000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_10M_HALF: u32 = 0x00020000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_100M_HALF: u32 = 0x00040000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_100M_FULL: u32 = 0x00080000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_1G: u32 = 0x00100000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_2_5G: u32 = 0x00200000;
pub const PORT_HW_CFG_SPEED_CAPABILITY_D0_10G: u32 = 0x00400000;

// port_hw_config.lane_config
pub const PORT_HW_CFG_LANE_SWAP_CFG_TX_MASK: u32 = 0x000000ff;
pub const PORT_HW_CFG_LANE_SWAP_CFG_TX_SHIFT: u32 = 0;
pub const PORT_HW_CFG_LANE_SWAP_CFG_RX_MASK: u32 = 0x0000ff00;
pub const PORT_HW_CFG_LANE_SWAP_CFG_RX_SHIFT: u32 = 8;
pub const PORT_HW_CFG_LANE_SWAP_CFG_MASTER_MASK: u32 = 0x0000c000;
pub const PORT_HW_CFG_LANE_SWAP_CFG_MASTER_SHIFT: u32 = 14;
pub const PORT_HW_CFG_SWAP_PHY_POLARITY_MASK: u32 = 0x00010000;
pub const PORT_HW_CFG_SWAP_PHY_POLARITY_ENABLED: u32 = 0x00010000;
pub const LANE_SWAP_NONE: u16 = 0x1b;

// port_hw_config.external_phy_config
pub const PORT_HW_CFG_XGXS_EXT_PHY_ADDR_MASK: u32 = 0x000000ff;
pub const PORT_HW_CFG_XGXS_EXT_PHY_ADDR_SHIFT: u32 = 0;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_MASK: u32 = 0x0000ff00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_DIRECT: u32 = 0x00000000;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8071: u32 = 0x00000100;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8072: u32 = 0x00000200;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073: u32 = 0x00000300;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8705: u32 = 0x00000400;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8706: u32 = 0x00000500;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8726: u32 = 0x00000600;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8481: u32 = 0x00000700;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_SFX7101: u32 = 0x00000800;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727: u32 = 0x00000900;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8727_NOC: u32 = 0x00000a00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84823: u32 = 0x00000b00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM54640: u32 = 0x00000c00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM84833: u32 = 0x00000d00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM54616: u32 = 0x00000e00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8722: u32 = 0x00000f00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_DIRECT_WC: u32 = 0x0000fc00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_FAILURE: u32 = 0x0000fd00;
pub const PORT_HW_CFG_XGXS_EXT_PHY_TYPE_NOT_CONN: u32 = 0x0000ff00;
pub const PORT_HW_CFG_SERDES_EXT_PHY_TYPE_MASK: u32 = 0xff000000;
pub const PORT_HW_CFG_SERDES_EXT_PHY_TYPE_NOT_CONN: u32 = 0xff000000;

// port_hw_config.multi_phy_config
pub const PORT_HW_CFG_PHY_SELECTION_MASK: u32 = 0x00000007;
pub const PORT_HW_CFG_PHY_SELECTION_HARDWARE_DEFAULT: u32 = 0x00000000;
pub const PORT_HW_CFG_PHY_SELECTION_FIRST_PHY: u32 = 0x00000001;
pub const PORT_HW_CFG_PHY_SELECTION_SECOND_PHY: u32 = 0x00000002;
pub const PORT_HW_CFG_PHY_SELECTION_FIRST_PHY_PRIORITY: u32 = 0x00000003;
pub const PORT_HW_CFG_PHY_SELECTION_SECOND_PHY_PRIORITY: u32 = 0x00000004;
pub const PORT_HW_CFG_PHY_SWAPPED_ENABLED: u32 = 0x00000008;

// port_hw_config.media_type, one byte per PHY slot
pub const PORT_HW_CFG_MEDIA_TYPE_PHY_MASK: u32 = 0xff;
pub const PORT_HW_CFG_MEDIA_TYPE_PHY_SHIFT: u32 = 8;

// port_hw_config.default_cfg
pub const PORT_HW_CFG_TX_LASER_MASK: u32 = 0x000000ff;
pub const PORT_HW_CFG_TX_LASER_MDIO: u32 = 0x00000000;
pub const PORT_HW_CFG_TX_LASER_GPIO0: u32 = 0x00000001;
pub const PORT_HW_CFG_TX_LASER_GPIO1: u32 = 0x00000002;
pub const PORT_HW_CFG_TX_LASER_GPIO2: u32 = 0x00000003;
pub const PORT_HW_CFG_TX_LASER_GPIO3: u32 = 0x00000004;
pub const PORT_HW_CFG_FAULT_MODULE_LED_MASK: u32 = 0x0000ff00;
pub const PORT_HW_CFG_FAULT_MODULE_LED_GPIO0: u32 = 0x00000000;
pub const PORT_HW_CFG_FAULT_MODULE_LED_GPIO1: u32 = 0x00000100;
pub const PORT_HW_CFG_FAULT_MODULE_LED_GPIO2: u32 = 0x00000200;
pub const PORT_HW_CFG_FAULT_MODULE_LED_GPIO3: u32 = 0x00000300;
pub const PORT_HW_CFG_FAULT_MODULE_LED_DISABLED: u32 = 0x00000400;
// port_hw_config.default_cfg
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_MASK: u32 = 0x000000ff;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO0_P0: u32 = 0x00000001;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO1_P0: u32 = 0x00000002;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO2_P0: u32 = 0x00000003;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO3_P0: u32 = 0x00000004;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO0_P1: u32 = 0x00000005;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO1_P1: u32 = 0x00000006;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO2_P1: u32 = 0x00000007;
pub const PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO3_P1: u32 = 0x00000008;
pub const PORT_HW_CFG_ENABLE_CMS: u32 = 0x00200000;
pub const PORT_HW_CFG_ENABLE_BAM_ON_KR_ENABLED: u32 = 0x00100000;

// port_feature_config.config
pub const PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_MASK: u32 = 0xe0000000;
pub const PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_NO_ENFORCEMENT: u32 = 0x00000000;
pub const PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_DISABLE_TX_LASER: u32 = 0x20000000;
pub const PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_WARNING_MSG: u32 = 0x40000000;
pub const PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_POWER_DOWN: u32 = 0x60000000;

// port_feature_config.link_config
pub const PORT_FEATURE_CONNECTED_SWITCH_MASK: u32 = 0x03000000;
pub const PORT_FEATURE_CON_SWITCH_1G_SWITCH: u32 = 0x00000000;
pub const PORT_FEATURE_CON_SWITCH_10G_SWITCH: u32 = 0x01000000;
pub const PORT_FEATURE_CON_SWITCH_AUTO_DETECT: u32 = 0x02000000;
pub const PORT_FEATURE_CON_SWITCH_ONE_TIME_DETECT: u32 = 0x03000000;
pub const PORT_FEATURE_LINK_SPEED_MASK: u32 = 0x000f0000;
pub const PORT_FEATURE_LINK_SPEED_AUTO: u32 = 0x00000000;
pub const PORT_FEATURE_LINK_SPEED_10M_FULL: u32 = 0x00010000;
pub const PORT_FEATURE_LINK_SPEED_10M_HALF: u32 = 0x00020000;
pub const PORT_FEATURE_LINK_SPEED_100M_HALF: u32 = 0x00030000;
pub const PORT_FEATURE_LINK_SPEED_100M_FULL: u32 = 0x00040000;
pub const PORT_FEATURE_LINK_SPEED_1G: u32 = 0x00050000;
pub const PORT_FEATURE_LINK_SPEED_2_5G: u32 = 0x00060000;
pub const PORT_FEATURE_LINK_SPEED_10G_CX4: u32 = 0x00070000;
pub const PORT_FEATURE_FLOW_CONTROL_MASK: u32 = 0x00000700;
pub const PORT_FEATURE_FLOW_CONTROL_AUTO: u32 = 0x00000000;
pub const PORT_FEATURE_FLOW_CONTROL_TX: u32 = 0x00000100;
pub const PORT_FEATURE_FLOW_CONTROL_RX: u32 = 0x00000200;
pub const PORT_FEATURE_FLOW_CONTROL_BOTH: u32 = 0x00000300;
pub const PORT_FEATURE_FLOW_CONTROL_NONE: u32 = 0x00000400;

// port_mb.link_status
pub const LINK_STATUS_LINK_UP: u32 = 0x00000001;
pub const LINK_STATUS_SPEED_AND_DUPLEX_MASK: u32 = 0x0000001e;
pub const LINK_STATUS_SPEED_AND_DUPLEX_10THD: u32 = 1 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_10TFD: u32 = 2 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_100TXHD: u32 = 3 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_100T4: u32 = 4 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_100TXFD: u32 = 5 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_1000THD: u32 = 6 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_1000TFD: u32 = 7 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_2500THD: u32 = 8 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_2500TFD: u32 = 9 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_10GTFD: u32 = 10 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_12GTFD: u32 = 11 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_12_5GTFD: u32 = 12 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_13GTFD: u32 = 13 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_15GTFD: u32 = 14 << 1;
pub const LINK_STATUS_SPEED_AND_DUPLEX_16GTFD: u32 = 15 << 1;
pub const LINK_STATUS_AUTO_NEGOTIATE_ENABLED: u32 = 0x00000020;
pub const LINK_STATUS_AUTO_NEGOTIATE_COMPLETE: u32 = 0x00000040;
pub const LINK_STATUS_PARALLEL_DETECTION_USED: u32 = 0x00000080;
pub const LINK_STATUS_TX_FLOW_CONTROL_ENABLED: u32 = 0x00010000;
pub const LINK_STATUS_TX_FLOW_CONTROL_FLAG_MASK: u32 = 0x00010000;
pub const LINK_STATUS_RX_FLOW_CONTROL_FLAG_MASK: u32 = 0x00020000;
pub const LINK_STATUS_PARALLEL_DETECTION_FLAG_MASK: u32 = 0x00000080;
pub const LINK_STATUS_RX_FLOW_CONTROL_ENABLED: u32 = 0x00020000;
pub const LINK_STATUS_LINK_PARTNER_SYMMETRIC_PAUSE: u32 = 1 << 18;
pub const LINK_STATUS_LINK_PARTNER_ASYMMETRIC_PAUSE: u32 = 2 << 18;
pub const LINK_STATUS_SERDES_LINK: u32 = 0x00100000;

// Firmware mailbox
pub const DRV_MSG_CODE_LINK_STATUS_CHANGED: u32 = 0x01000000;
pub const DRV_MSG_CODE_VRFY_FIRST_PHY_OPT_MDL: u32 = 0xa0000000;
pub const DRV_MSG_CODE_VRFY_SPECIFIC_PHY_OPT_MDL: u32 = 0xa1000000;
pub const FW_MSG_CODE_VRFY_OPT_MDL_SUCCESS: u32 = 0xa0100000;
pub const FW_PARAM_MDIO_CTRL_OFFSET: u32 = 16;

// GRC blocks
pub const GRCBASE_EMAC0: u32 = 0x8000;
pub const GRCBASE_EMAC1: u32 = 0x8400;
pub const GRCBASE_MISC: u32 = 0xa000;
pub const NIG_REG_INGRESS_BMAC0_MEM: u32 = 0x10c00;
pub const NIG_REG_INGRESS_BMAC1_MEM: u32 = 0x11000;

// MISC
pub const MISC_REGISTERS_RESET_REG_2_SET: u32 = 0x594;
pub const MISC_REGISTERS_RESET_REG_2_CLEAR: u32 = 0x598;
pub const MISC_REGISTERS_RESET_REG_3_SET: u32 = 0x5a4;
pub const MISC_REGISTERS_RESET_REG_3_CLEAR: u32 = 0x5a8;
pub const MISC_REG_RESET_REG_2: u32 = 0xa590;
pub const MISC_REGISTERS_RESET_REG_2_RST_BMAC0: u32 = 1 << 0;
pub const MISC_REGISTERS_RESET_REG_2_RST_EMAC0_HARD_CORE: u32 = 1 << 14;
pub const MISC_REGISTERS_RESET_REG_3_SERDES0_RSTB_HW: u32 = 1 << 0;
pub const MISC_REGISTERS_RESET_REG_3_SERDES0_IDDQ: u32 = 1 << 1;
pub const MISC_REGISTERS_RESET_REG_3_SERDES0_PWRDWN: u32 = 1 << 2;
pub const MISC_REGISTERS_RESET_REG_3_SERDES0_PWRDWN_SD: u32 = 1 << 3;
pub const MISC_REGISTERS_RESET_REG_3_XGXS0_RSTB_HW: u32 = 1 << 4;
pub const MISC_REGISTERS_RESET_REG_3_XGXS0_IDDQ: u32 = 1 << 5;
pub const MISC_REGISTERS_RESET_REG_3_XGXS0_PWRDWN: u32 = 1 << 6;
pub const MISC_REGISTERS_RESET_REG_3_XGXS0_PWRDWN_SD: u32 = 1 << 7;
pub const MISC_REGISTERS_RESET_REG_3_XGXS0_TXD_FIFO_RSTB: u32 = 1 << 8;
pub const SERDES_RESET_BITS: u32 = MISC_REGISTERS_RESET_REG_3_SERDES0_RSTB_HW
    | MISC_REGISTERS_RESET_REG_3_SERDES0_IDDQ
    | MISC_REGISTERS_RESET_REG_3_SERDES0_PWRDWN
    | MISC_REGISTERS_RESET_REG_3_SERDES0_PWRDWN_SD;
pub const XGXS_RESET_BITS: u32 = MISC_REGISTERS_RESET_REG_3_XGXS0_RSTB_HW
    | MISC_REGISTERS_RESET_REG_3_XGXS0_IDDQ
    | MISC_REGISTERS_RESET_REG_3_XGXS0_PWRDWN
    | MISC_REGISTERS_RESET_REG_3_XGXS0_PWRDWN_SD
    | MISC_REGISTERS_RESET_REG_3_XGXS0_TXD_FIFO_RSTB;
pub const MISC_REGISTERS_GPIO_0: u8 = 0;
pub const MISC_REGISTERS_GPIO_1: u8 = 1;
pub const MISC_REGISTERS_GPIO_2: u8 = 2;
pub const MISC_REGISTERS_GPIO_3: u8 = 3;
pub const MISC_REGISTERS_GPIO_PORT_SHIFT: u32 = 4;
pub const MISC_REGISTERS_GPIO_HIGH: u32 = 1;
pub const MISC_REG_AEU_ENABLE1_FUNC_0_OUT_0: u32 = 0xa054;
pub const MISC_REG_AEU_ENABLE1_FUNC_1_OUT_0: u32 = 0xa08c;
pub const MISC_REG_GPIO_EVENT_EN: u32 = 0xa2bc;
pub const AEU_INPUTS_ATTN_BITS_GPIO0_FUNCTION_0: u32 = 1 << 2;

// NIG
pub const NIG_REG_BMAC0_IN_EN: u32 = 0x100ac;
pub const NIG_REG_BMAC0_OUT_EN: u32 = 0x100e0;
pub const NIG_REG_BMAC0_PAUSE_OUT_EN: u32 = 0x10110;
pub const NIG_REG_BMAC0_REGS_OUT_EN: u32 = 0x100e8;
pub const NIG_REG_EGRESS_DRAIN0_MODE: u32 = 0x10060;
pub const NIG_REG_EGRESS_EMAC0_OUT_EN: u32 = 0x10120;
pub const NIG_REG_EGRESS_EMAC0_PORT: u32 = 0x10058;
pub const NIG_REG_EMAC0_IN_EN: u32 = 0x100a4;
pub const NIG_REG_EMAC0_PAUSE_OUT_EN: u32 = 0x10118;
pub const NIG_REG_EMAC0_STATUS_MISC_MI_INT: u32 = 0x10494;
pub const NIG_REG_NIG_EMAC0_EN: u32 = 0x1003c;
pub const NIG_REG_NIG_INGRESS_EMAC0_NO_CRC: u32 = 0x10044;
pub const NIG_REG_XCM0_OUT_EN: u32 = 0x100f0;
pub const NIG_REG_LATCH_BC_0: u32 = 0x16210;
pub const NIG_LATCH_BC_ENABLE_MI_INT: u32 = 0;
pub const NIG_REG_LATCH_STATUS_0: u32 = 0x18000;
pub const NIG_REG_MASK_INTERRUPT_PORT0: u32 = 0x10330;
pub const NIG_REG_STATUS_INTERRUPT_PORT0: u32 = 0x10328;
pub const NIG_REG_LED_10G_P0: u32 = 0x10320;
pub const NIG_REG_LED_CONTROL_BLINK_RATE_ENA_P0: u32 = 0x10318;
pub const NIG_REG_LED_CONTROL_BLINK_RATE_P0: u32 = 0x10310;
pub const NIG_REG_LED_CONTROL_BLINK_TRAFFIC_P0: u32 = 0x10308;
pub const NIG_REG_LED_CONTROL_OVERRIDE_TRAFFIC_P0: u32 = 0x102f8;
pub const NIG_REG_LED_CONTROL_TRAFFIC_P0: u32 = 0x10300;
pub const NIG_REG_LED_MODE_P0: u32 = 0x102f0;
pub const NIG_REG_LLFC_EGRESS_SRC_ENABLE_0: u32 = 0x16070;
pub const NIG_REG_LLFC_ENABLE_0: u32 = 0x16208;
pub const NIG_REG_LLFC_ENABLE_1: u32 = 0x1620c;
pub const NIG_REG_LLFC_HIGH_PRIORITY_CLASSES_0: u32 = 0x16058;
pub const NIG_REG_LLFC_HIGH_PRIORITY_CLASSES_1: u32 = 0x1605c;
pub const NIG_REG_LLFC_LOW_PRIORITY_CLASSES_0: u32 = 0x16060;
pub const NIG_REG_LLFC_LOW_PRIORITY_CLASSES_1: u32 = 0x16064;
pub const NIG_REG_LLFC_OUT_EN_0: u32 = 0x160c8;
pub const NIG_REG_LLFC_OUT_EN_1: u32 = 0x160cc;
pub const NIG_REG_LLH0_XCM_MASK: u32 = 0x10130;
pub const NIG_REG_LLH1_XCM_MASK: u32 = 0x10134;
pub const NIG_LLH0_XCM_MASK_REG_LLH0_XCM_MASK_BCN: u32 = 1 << 0;
pub const NIG_LLH1_XCM_MASK_REG_LLH1_XCM_MASK_BCN: u32 = 1 << 0;
pub const NIG_REG_P0_HWPFC_ENABLE: u32 = 0x18078;
pub const NIG_REG_P0_PKT_PRIORITY_TO_COS: u32 = 0x18054;
pub const NIG_REG_P1_PKT_PRIORITY_TO_COS: u32 = 0x181a8;
pub const NIG_REG_P0_RX_COS0_PRIORITY_MASK: u32 = 0x18058;
pub const NIG_REG_P0_RX_COS1_PRIORITY_MASK: u32 = 0x1805c;
pub const NIG_REG_P1_RX_COS0_PRIORITY_MASK: u32 = 0x181ac;
pub const NIG_REG_P1_RX_COS1_PRIORITY_MASK: u32 = 0x181b0;
pub const NIG_REG_P0_TX_ARB_PRIORITY_CLIENT: u32 = 0x180e0;
pub const NIG_REG_P0_TX_ARB_NUM_STRICT_ARB_SLOTS: u32 = 0x180e4;
pub const NIG_REG_P0_TX_ARB_CLIENT_IS_STRICT: u32 = 0x180e8;
pub const NIG_REG_P0_TX_ARB_CLIENT_IS_SUBJECT2WFQ: u32 = 0x180ec;
pub const NIG_REG_P0_TX_ARB_CLIENT_CREDIT_MAP: u32 = 0x180f0;
pub const NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_0: u32 = 0x180f4;
pub const NIG_REG_P0_TX_ARB_CREDIT_WEIGHT_1: u32 = 0x180f8;
pub const NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_0: u32 = 0x1810c;
pub const NIG_REG_P0_TX_ARB_CREDIT_UPPER_BOUND_1: u32 = 0x18110;
pub const NIG_REG_PAUSE_ENABLE_0: u32 = 0x160c0;
pub const NIG_REG_PAUSE_ENABLE_1: u32 = 0x160c4;
pub const NIG_REG_PPP_ENABLE_0: u32 = 0x160b0;
pub const NIG_REG_PPP_ENABLE_1: u32 = 0x160b4;
pub const NIG_REG_PORT_SWAP: u32 = 0x10394;
pub const NIG_REG_STRAP_OVERRIDE: u32 = 0x10398;
pub const NIG_REG_SERDES0_CTRL_MD_DEVAD: u32 = 0x10370;
pub const NIG_REG_SERDES0_CTRL_MD_ST: u32 = 0x1036c;
pub const NIG_REG_SERDES0_CTRL_PHY_ADDR: u32 = 0x10374;
pub const NIG_REG_SERDES0_STATUS_LINK_STATUS: u32 = 0x10578;
pub const NIG_REG_XGXS0_CTRL_MD_DEVAD: u32 = 0x1033c;
pub const NIG_REG_XGXS0_CTRL_MD_ST: u32 = 0x10338;
pub const NIG_REG_XGXS0_CTRL_PHY_ADDR: u32 = 0x10340;
pub const NIG_REG_XGXS0_STATUS_LINK10G: u32 = 0x10680;
pub const NIG_REG_XGXS0_STATUS_LINK_STATUS: u32 = 0x10684;
pub const NIG_REG_XGXS_LANE_SEL_P0: u32 = 0x102e8;
pub const NIG_REG_XGXS_SERDES0_MODE_SEL: u32 = 0x102e0;

pub const NIG_STATUS_EMAC0_MI_INT: u32 = 1 << 0;
pub const NIG_STATUS_SERDES0_LINK_STATUS: u32 = 1 << 9;
pub const NIG_STATUS_XGXS0_LINK10G: u32 = 1 << 15;
pub const NIG_STATUS_XGXS0_LINK_STATUS: u32 = 1 << 16;
pub const NIG_STATUS_XGXS0_LINK_STATUS_SIZE: u32 = 18;
pub const NIG_MASK_MI_INT: u32 = 1 << 0;
pub const NIG_MASK_SERDES0_LINK_STATUS: u32 = 1 << 9;
pub const NIG_MASK_XGXS0_LINK10G: u32 = 1 << 15;
pub const NIG_MASK_XGXS0_LINK_STATUS: u32 = 1 << 16;

// BRB
pub const BRB1_REG_PAUSE_0_XOFF_THRESHOLD_0: u32 = 0x601c0;
pub const BRB1_REG_PAUSE_0_XON_THRESHOLD_0: u32 = 0x601d0;
pub const BRB1_REG_FULL_0_XOFF_THRESHOLD_0: u32 = 0x601d8;
pub const BRB1_REG_FULL_0_XON_THRESHOLD_0: u32 = 0x601e8;
pub const BRB1_REG_PAUSE_1_XOFF_THRESHOLD_0: u32 = 0x601c8;
pub const BRB1_REG_PAUSE_1_XON_THRESHOLD_0: u32 = 0x601e0;
pub const BRB1_REG_FULL_1_XOFF_THRESHOLD_0: u32 = 0x601f0;
pub const BRB1_REG_FULL_1_XON_THRESHOLD_0: u32 = 0x601f8;

pub const PFC_BRB_MAC_PAUSE_XOFF_THRESHOLD_PAUSEABLE: u32 = 170;
pub const PFC_BRB_MAC_PAUSE_XON_THRESHOLD_PAUSEABLE: u32 = 250;
pub const PFC_BRB_MAC_FULL_XOFF_THRESHOLD_PAUSEABLE: u32 = 10;
pub const PFC_BRB_MAC_FULL_XON_THRESHOLD_PAUSEABLE: u32 = 50;
pub const PFC_BRB_MAC_PAUSE_XOFF_THRESHOLD_NON_PAUSEABLE: u32 = 0;
pub const PFC_BRB_MAC_PAUSE_XON_THRESHOLD_NON_PAUSEABLE: u32 = 0;
pub const PFC_BRB_MAC_FULL_XOFF_THRESHOLD_NON_PAUSEABLE: u32 = 130;
pub const PFC_BRB_MAC_FULL_XON_THRESHOLD_NON_PAUSEABLE: u32 = 170;

// PBF
pub const PBF_REG_DISABLE_NEW_TASK_PROC_P0: u32 = 0x14005c;
pub const PBF_REG_P0_ARB_THRSH: u32 = 0x1400e4;
pub const PBF_REG_P0_CREDIT: u32 = 0x140200;
pub const PBF_REG_P0_INIT_CRD: u32 = 0x1400d0;
pub const PBF_REG_P0_PAUSE_ENABLE: u32 = 0x140014;
pub const PBF_REG_INIT_P0: u32 = 0x140004;
pub const PBF_REG_HIGH_PRIORITY_COS_NUM: u32 = 0x15c04c;
pub const PBF_REG_ETS_ENABLED: u32 = 0x15c050;
pub const PBF_REG_COS0_WEIGHT: u32 = 0x15c054;
pub const PBF_REG_COS1_WEIGHT: u32 = 0x15c058;
pub const PBF_REG_COS0_UPPER_BOUND: u32 = 0x15c05c;
pub const PBF_REG_COS1_UPPER_BOUND: u32 = 0x15c060;
pub const PBF_REG_NUM_STRICT_ARB_SLOTS: u32 = 0x15c064;

pub const ETS_BW_LIMIT_CREDIT_UPPER_BOUND: u32 = 0x5000;
pub const ETS_BW_LIMIT_CREDIT_WEIGHT: u32 = 0x5000;

// EMAC
pub const EMAC_REG_EMAC_MODE: u32 = 0x0;
pub const EMAC_REG_EMAC_LED: u32 = 0xc;
pub const EMAC_REG_EMAC_MAC_MATCH: u32 = 0x10;
pub const EMAC_REG_EMAC_RX_MTU_SIZE: u32 = 0x9c;
pub const EMAC_REG_EMAC_MDIO_COMM: u32 = 0xac;
pub const EMAC_REG_EMAC_MDIO_STATUS: u32 = 0xb0;
pub const EMAC_REG_EMAC_MDIO_MODE: u32 = 0xb4;
pub const EMAC_REG_EMAC_TX_MODE: u32 = 0xbc;
pub const EMAC_REG_EMAC_RX_MODE: u32 = 0xc8;
pub const EMAC_REG_RX_PFC_MODE: u32 = 0x320;
pub const EMAC_REG_RX_PFC_PARAM: u32 = 0x324;
pub const EMAC_REG_RX_PFC_STATS_XOFF_RCVD: u32 = 0x328;
pub const EMAC_REG_RX_PFC_STATS_XON_RCVD: u32 = 0x32c;
pub const EMAC_REG_RX_PFC_STATS_XOFF_SENT: u32 = 0x330;
pub const EMAC_REG_RX_PFC_STATS_XON_SENT: u32 = 0x334;
pub const EMAC_REG_RX_PFC_STATS_COUNT: u32 = 0xffff;

pub const EMAC_MODE_RESET: u32 = 1 << 0;
pub const EMAC_MODE_HALF_DUPLEX: u32 = 1 << 1;
pub const EMAC_MODE_PORT_MII: u32 = 1 << 2;
pub const EMAC_MODE_PORT_GMII: u32 = 2 << 2;
pub const EMAC_MODE_PORT_MII_10M: u32 = 3 << 2;
pub const EMAC_MODE_25G_MODE: u32 = 1 << 5;
pub const EMAC_MODE_LOOPBACK: u32 = 0x810;
pub const EMAC_LED_OVERRIDE: u32 = 1 << 0;
pub const EMAC_RX_MTU_SIZE_JUMBO_ENA: u32 = 1 << 31;
pub const EMAC_MDIO_COMM_COMMAND_ADDRESS: u32 = 0;
pub const EMAC_MDIO_COMM_COMMAND_WRITE_45: u32 = 1 << 26;
pub const EMAC_MDIO_COMM_COMMAND_READ_45: u32 = 3 << 26;
pub const EMAC_MDIO_COMM_START_BUSY: u32 = 1 << 29;
pub const EMAC_MDIO_COMM_DATA: u32 = 0xffff;
pub const EMAC_MDIO_MODE_AUTO_POLL: u32 = 1 << 4;
pub const EMAC_MDIO_MODE_CLAUSE_45: u32 = 1 << 31;
pub const EMAC_MDIO_MODE_CLOCK_CNT: u32 = 0x3ff << 16;
pub const EMAC_MDIO_MODE_CLOCK_CNT_BITSHIFT: u32 = 16;
pub const EMAC_TX_MODE_RESET: u32 = 1 << 0;
pub const EMAC_TX_MODE_EXT_PAUSE_EN: u32 = 1 << 3;
pub const EMAC_TX_MODE_FLOW_EN: u32 = 1 << 4;
pub const EMAC_RX_MODE_RESET: u32 = 1 << 0;
pub const EMAC_RX_MODE_KEEP_MAC_CONTROL: u32 = 1 << 3;
pub const EMAC_RX_MODE_FLOW_EN: u32 = 1 << 5;
pub const EMAC_RX_MODE_PROMISCUOUS: u32 = 1 << 8;
pub const EMAC_RX_MODE_KEEP_VLAN_TAG: u32 = 1 << 10;
pub const EMAC_REG_RX_PFC_MODE_TX_EN: u32 = 1 << 0;
pub const EMAC_REG_RX_PFC_MODE_RX_EN: u32 = 1 << 1;
pub const EMAC_REG_RX_PFC_MODE_PRIORITIES: u32 = 1 << 2;
pub const EMAC_REG_RX_PFC_PARAM_OPCODE_BITSHIFT: u32 = 0;
pub const EMAC_REG_RX_PFC_PARAM_PRIORITY_EN_BITSHIFT: u32 = 16;

// BigMAC, first generation
pub const BIGMAC_REGISTER_BMAC_CONTROL: u32 = 0x00;
pub const BIGMAC_REGISTER_BMAC_XGXS_CONTROL: u32 = 0x08;
pub const BIGMAC_REGISTER_CNT_MAX_SIZE: u32 = 0x28;
pub const BIGMAC_REGISTER_TX_CONTROL: u32 = 0x38;
pub const BIGMAC_REGISTER_TX_SOURCE_ADDR: u32 = 0x40;
pub const BIGMAC_REGISTER_TX_MAX_SIZE: u32 = 0x48;
pub const BIGMAC_REGISTER_TX_PAUSE_THRESHOLD: u32 = 0x50;
pub const BIGMAC_REGISTER_RX_CONTROL: u32 = 0x108;
pub const BIGMAC_REGISTER_RX_MAX_SIZE: u32 = 0x118;
pub const BIGMAC_REGISTER_RX_LLFC_MSG_FLDS: u32 = 0x230;

// BigMAC, second generation
pub const BIGMAC2_REGISTER_BMAC_CONTROL: u32 = 0x00;
pub const BIGMAC2_REGISTER_BMAC_XGXS_CONTROL: u32 = 0x08;
pub const BIGMAC2_REGISTER_CNT_MAX_SIZE: u32 = 0x28;
pub const BIGMAC2_REGISTER_PFC_CONTROL: u32 = 0x30;
pub const BIGMAC2_REGISTER_TX_CONTROL: u32 = 0xe0;
pub const BIGMAC2_REGISTER_TX_SOURCE_ADDR: u32 = 0xe8;
pub const BIGMAC2_REGISTER_TX_MAX_SIZE: u32 = 0xf0;
pub const BIGMAC2_REGISTER_TX_PAUSE_CONTROL: u32 = 0x100;
pub const BIGMAC2_REGISTER_TX_STAT_GTPP: u32 = 0x1a0;
pub const BIGMAC2_REGISTER_RX_CONTROL: u32 = 0x1d0;
pub const BIGMAC2_REGISTER_RX_MAX_SIZE: u32 = 0x1e0;
pub const BIGMAC2_REGISTER_RX_STAT_GRPP: u32 = 0x2a8;
pub const BIGMAC2_REGISTER_RX_LLFC_MSG_FLDS: u32 = 0x310;

pub const BMAC_CONTROL_RX_ENABLE: u32 = 2;

// Internal PHY register banks, reached as clause 22 over clause 45.
pub const MDIO_REG_BANK_CL73_IEEEB0: u16 = 0x0;
pub const MDIO_CL73_IEEEB0_CL73_AN_CONTROL: u16 = 0x0;
pub const MDIO_CL73_IEEEB0_CL73_AN_CONTROL_RESTART_AN: u16 = 0x0200;
pub const MDIO_CL73_IEEEB0_CL73_AN_CONTROL_AN_EN: u16 = 0x1000;
pub const MDIO_CL73_IEEEB0_CL73_AN_CONTROL_MAIN_RST: u16 = 0x8000;

pub const MDIO_REG_BANK_CL73_IEEEB1: u16 = 0x10;
pub const MDIO_CL73_IEEEB1_AN_ADV1: u16 = 0x00;
pub const MDIO_CL73_IEEEB1_AN_ADV1_PAUSE_BOTH: u16 = 0x0c00;
pub const MDIO_CL73_IEEEB1_AN_ADV1_PAUSE_MASK: u16 = 0x0c00;
pub const MDIO_CL73_IEEEB1_AN_ADV2: u16 = 0x01;
pub const MDIO_CL73_IEEEB1_AN_ADV2_ADVR_1000M_KX: u16 = 0x0020;
pub const MDIO_CL73_IEEEB1_AN_ADV2_ADVR_10G_KX4: u16 = 0x0040;
pub const MDIO_CL73_IEEEB1_AN_LP_ADV1: u16 = 0x03;
pub const MDIO_CL73_IEEEB1_AN_LP_ADV1_PAUSE_MASK: u16 = 0x0c00;

pub const MDIO_REG_BANK_RX0: u16 = 0x80b0;
pub const MDIO_REG_BANK_RX1: u16 = 0x80c0;
pub const MDIO_REG_BANK_RX3: u16 = 0x80e0;
pub const MDIO_RX0_RX_STATUS: u16 = 0x10;
pub const MDIO_RX0_RX_STATUS_SIGDET: u16 = 0x8000;
pub const MDIO_RX0_RX_EQ_BOOST: u16 = 0x1c;

pub const MDIO_REG_BANK_TX0: u16 = 0x8060;
pub const MDIO_REG_BANK_TX1: u16 = 0x8070;
pub const MDIO_REG_BANK_TX3: u16 = 0x8090;
pub const MDIO_TX0_TX_DRIVER: u16 = 0x17;
pub const MDIO_TX0_TX_DRIVER_PREEMPHASIS_MASK: u16 = 0xf000;
pub const MDIO_TX0_TX_DRIVER_PREEMPHASIS_SHIFT: u16 = 12;

pub const MDIO_REG_BANK_XGXS_BLOCK2: u16 = 0x8100;
pub const MDIO_XGXS_BLOCK2_RX_LN_SWAP: u16 = 0x10;
pub const MDIO_XGXS_BLOCK2_RX_LN_SWAP_ENABLE: u16 = 0x8000;
pub const MDIO_XGXS_BLOCK2_RX_LN_SWAP_FORCE_ENABLE: u16 = 0x4000;
pub const MDIO_XGXS_BLOCK2_TX_LN_SWAP: u16 = 0x11;
pub const MDIO_XGXS_BLOCK2_TX_LN_SWAP_ENABLE: u16 = 0x8000;
pub const MDIO_XGXS_BLOCK2_UNICORE_MODE_10G: u16 = 0x14;
pub const MDIO_XGXS_BLOCK2_UNICORE_MODE_10G_CX4_XGXS: u16 = 0x0001;
pub const MDIO_XGXS_BLOCK2_UNICORE_MODE_10G_HIGIG_XGXS: u16 = 0x0010;
pub const MDIO_XGXS_BLOCK2_TEST_MODE_LANE: u16 = 0x15;

pub const MDIO_REG_BANK_GP_STATUS: u16 = 0x8120;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1: u16 = 0x1b;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_CL73_AUTONEG_COMPLETE: u16 = 0x0001;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_CL37_AUTONEG_COMPLETE: u16 = 0x0002;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS: u16 = 0x0004;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_DUPLEX_STATUS: u16 = 0x0008;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_CL73_MR_LP_NP_AN_ABLE: u16 = 0x0010;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_PAUSE_RSOLUTION_TXSIDE: u16 = 0x0040;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_PAUSE_RSOLUTION_RXSIDE: u16 = 0x0080;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_MASK: u16 = 0x3f00;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10M: u16 = 0x0000;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_100M: u16 = 0x0100;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G: u16 = 0x0200;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_2_5G: u16 = 0x0300;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_5G: u16 = 0x0400;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_6G: u16 = 0x0500;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_HIG: u16 = 0x0600;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_CX4: u16 = 0x0700;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_12G_HIG: u16 = 0x0800;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_12_5G: u16 = 0x0900;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_13G: u16 = 0x0a00;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_15G: u16 = 0x0b00;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_16G: u16 = 0x0c00;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G_KX: u16 = 0x0d00;
pub const MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_KX4: u16 = 0x0e00;
pub const MDIO_AN_CL73_OR_37_COMPLETE: u16 = MDIO_GP_STATUS_TOP_AN_STATUS1_CL73_AUTONEG_COMPLETE
    | MDIO_GP_STATUS_TOP_AN_STATUS1_CL37_AUTONEG_COMPLETE;

pub const MDIO_REG_BANK_10G_PARALLEL_DETECT: u16 = 0x8130;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_STATUS: u16 = 0x10;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_STATUS_PD_LINK: u16 = 0x8000;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_CONTROL: u16 = 0x11;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_CONTROL_PARDET10G_EN: u16 = 0x1;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_LINK: u16 = 0x13;
pub const MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_LINK_CNT: u16 = 0xb71 << 1;

pub const MDIO_REG_BANK_SERDES_DIGITAL: u16 = 0x8300;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1: u16 = 0x10;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_FIBER_MODE: u16 = 0x0001;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_SIGNAL_DETECT_EN: u16 = 0x0004;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_INVERT_SIGNAL_DETECT: u16 = 0x0008;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_AUTODET: u16 = 0x0010;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_MSTR_MODE: u16 = 0x0020;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL2: u16 = 0x11;
pub const MDIO_SERDES_DIGITAL_A_1000X_CONTROL2_PRL_DT_EN: u16 = 0x0001;
pub const MDIO_SERDES_DIGITAL_A_1000X_STATUS1: u16 = 0x14;
pub const MDIO_SERDES_DIGITAL_A_1000X_STATUS2: u16 = 0x15;
pub const MDIO_SERDES_DIGITAL_A_1000X_STATUS2_AN_DISABLED: u16 = 0x0002;
pub const MDIO_SERDES_DIGITAL_MISC1: u16 = 0x18;
pub const MDIO_SERDES_DIGITAL_MISC1_REFCLK_SEL_156_25M: u16 = 0x6000;
pub const MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_SEL: u16 = 0x0010;
pub const MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_MASK: u16 = 0x000f;
pub const MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_10G_CX4: u16 = 0x0004;
pub const MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_13G: u16 = 0x0007;

pub const MDIO_REG_BANK_OVER_1G: u16 = 0x8320;
pub const MDIO_OVER_1G_UP1: u16 = 0x19;
pub const MDIO_OVER_1G_UP1_2_5G: u16 = 0x0001;
pub const MDIO_OVER_1G_UP1_10G: u16 = 0x0010;
pub const MDIO_OVER_1G_UP3: u16 = 0x1b;
pub const MDIO_OVER_1G_LP_UP2: u16 = 0x1d;
pub const MDIO_OVER_1G_LP_UP2_PREEMPHASIS_MASK: u16 = 0x0780;
pub const MDIO_OVER_1G_LP_UP2_PREEMPHASIS_SHIFT: u16 = 7;

pub const MDIO_REG_BANK_REMOTE_PHY: u16 = 0x8330;
pub const MDIO_REMOTE_PHY_MISC_RX_STATUS: u16 = 0x10;
pub const MDIO_REMOTE_PHY_MISC_RX_STATUS_CL37_FSM_RECEIVED_OVER1G_MSG: u16 = 0x0010;
pub const MDIO_REMOTE_PHY_MISC_RX_STATUS_CL37_FSM_RECEIVED_BRCM_OUI_MSG: u16 = 0x0600;

pub const MDIO_REG_BANK_BAM_NEXT_PAGE: u16 = 0x8350;
pub const MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL: u16 = 0x10;
pub const MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL_BAM_MODE: u16 = 0x0001;
pub const MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL_TETON_AN: u16 = 0x0002;

pub const MDIO_REG_BANK_CL73_USERB0: u16 = 0x8370;
pub const MDIO_CL73_USERB0_CL73_UCTRL: u16 = 0x10;
pub const MDIO_CL73_USERB0_CL73_USTAT1: u16 = 0x11;
pub const MDIO_CL73_USERB0_CL73_USTAT1_LINK_STATUS_CHECK: u16 = 0x0100;
pub const MDIO_CL73_USERB0_CL73_USTAT1_AN_GOOD_CHECK_BAM37: u16 = 0x0400;
pub const MDIO_CL73_USERB0_CL73_BAM_CTRL1: u16 = 0x12;
pub const MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_EN: u16 = 0x8000;
pub const MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_STATION_MNGR_EN: u16 = 0x4000;
pub const MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_NP_AFTER_BP_EN: u16 = 0x2000;

pub const MDIO_REG_BANK_AER_BLOCK: u16 = 0xffd0;
pub const MDIO_AER_BLOCK_AER_REG: u16 = 0x1e;

pub const MDIO_REG_BANK_COMBO_IEEE0: u16 = 0xffe0;
pub const MDIO_COMBO_IEEE0_MII_CONTROL: u16 = 0x10;
pub const MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_MASK: u16 = 0x2040;
pub const MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_10: u16 = 0x0000;
pub const MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_100: u16 = 0x2000;
pub const MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_1000: u16 = 0x0040;
pub const MDIO_COMBO_IEEO_MII_CONTROL_FULL_DUPLEX: u16 = 0x0100;
pub const MDIO_COMBO_IEEO_MII_CONTROL_RESTART_AN: u16 = 0x0200;
pub const MDIO_COMBO_IEEO_MII_CONTROL_AN_EN: u16 = 0x1000;
pub const MDIO_COMBO_IEEO_MII_CONTROL_LOOPBACK: u16 = 0x4000;
pub const MDIO_COMBO_IEEO_MII_CONTROL_RESET: u16 = 0x8000;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV: u16 = 0x14;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_FULL_DUPLEX: u16 = 0x0020;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_MASK: u16 = 0x0180;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_NONE: u16 = 0x0000;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_SYMMETRIC: u16 = 0x0080;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC: u16 = 0x0100;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH: u16 = 0x0180;
pub const MDIO_COMBO_IEEE0_AUTO_NEG_LINK_PARTNER_ABILITY1: u16 = 0x15;

// Clause 45 device addresses
pub const MDIO_PMA_DEVAD: u8 = 0x1;
pub const MDIO_WIS_DEVAD: u8 = 0x2;
pub const MDIO_PCS_DEVAD: u8 = 0x3;
pub const MDIO_XS_DEVAD: u8 = 0x4;
pub const MDIO_AN_DEVAD: u8 = 0x7;
pub const MDIO_CTL_DEVAD: u8 = 0x1e;

// PMA/PMD
pub const MDIO_PMA_REG_CTRL: u16 = 0x0;
pub const MDIO_PMA_REG_STATUS: u16 = 0x1;
pub const MDIO_PMA_REG_10G_CTRL2: u16 = 0x7;
pub const MDIO_PMA_REG_TX_DISABLE: u16 = 0x0009;
pub const MDIO_PMA_REG_RX_SD: u16 = 0xa;
pub const MDIO_PMA_REG_BCM_CTRL: u16 = 0x0096;
pub const MDIO_PMA_REG_FEC_CTRL: u16 = 0x00ab;
pub const MDIO_PMA_REG_RX_ALARM_CTRL: u16 = 0x9000;
pub const MDIO_PMA_REG_TX_ALARM_CTRL: u16 = 0x9001;
pub const MDIO_PMA_REG_LASI_CTRL: u16 = 0x9002;
pub const MDIO_PMA_REG_RX_ALARM: u16 = 0x9003;
pub const MDIO_PMA_REG_TX_ALARM: u16 = 0x9004;
pub const MDIO_PMA_REG_LASI_STATUS: u16 = 0x9005;
pub const MDIO_PMA_REG_PHY_IDENTIFIER: u16 = 0xc800;
pub const MDIO_PMA_REG_DIGITAL_CTRL: u16 = 0xc808;
pub const MDIO_PMA_REG_DIGITAL_STATUS: u16 = 0xc809;
pub const MDIO_PMA_REG_TX_POWER_DOWN: u16 = 0xca02;
pub const MDIO_PMA_REG_CMU_PLL_BYPASS: u16 = 0xca09;
pub const MDIO_PMA_REG_MISC_CTRL: u16 = 0xca0a;
pub const MDIO_PMA_REG_GEN_CTRL: u16 = 0xca10;
pub const MDIO_PMA_REG_GEN_CTRL_ROM_RESET_INTERNAL_MP: u16 = 0x0188;
pub const MDIO_PMA_REG_GEN_CTRL_ROM_MICRO_RESET: u16 = 0x018a;
pub const MDIO_PMA_REG_M8051_MSGIN_REG: u16 = 0xca12;
pub const MDIO_PMA_REG_M8051_MSGOUT_REG: u16 = 0xca13;
pub const MDIO_PMA_REG_ROM_VER1: u16 = 0xca19;
pub const MDIO_PMA_REG_ROM_VER2: u16 = 0xca1a;
pub const MDIO_PMA_REG_EDC_FFE_MAIN: u16 = 0xca1b;
pub const MDIO_PMA_REG_PLL_BANDWIDTH: u16 = 0xca1d;
pub const MDIO_PMA_REG_PLL_CTRL: u16 = 0xca1e;
pub const MDIO_PMA_REG_MISC_CTRL0: u16 = 0xca23;
pub const MDIO_PMA_REG_LRM_MODE: u16 = 0xca3f;
pub const MDIO_PMA_REG_CDR_BANDWIDTH: u16 = 0xca46;
pub const MDIO_PMA_REG_MISC_CTRL1: u16 = 0xca85;

pub const MDIO_PMA_REG_7101_RESET: u16 = 0xc000;
pub const MDIO_PMA_REG_7107_LED_CNTL: u16 = 0xc007;
pub const MDIO_PMA_REG_7107_LINK_LED_CNTL: u16 = 0xc009;
pub const MDIO_PMA_REG_7101_VER1: u16 = 0xc026;
pub const MDIO_PMA_REG_7101_VER2: u16 = 0xc027;

pub const MDIO_PMA_REG_8073_CHIP_REV: u16 = 0xc801;
pub const MDIO_PMA_REG_8073_SPEED_LINK_STATUS: u16 = 0xc820;
pub const MDIO_PMA_REG_8073_XAUI_WA: u16 = 0xc841;
pub const MDIO_PMA_REG_8073_OPT_DIGITAL_CTRL: u16 = 0xcd08;

pub const MDIO_PMA_REG_8726_TWO_WIRE_DATA_BUF: u16 = 0xc820;
pub const MDIO_PMA_REG_8726_TWO_WIRE_DATA_MASK: u16 = 0xff;
pub const MDIO_PMA_REG_8726_TX_CTRL1: u16 = 0xca01;
pub const MDIO_PMA_REG_8726_TX_CTRL2: u16 = 0xca05;

pub const MDIO_PMA_REG_8727_TWO_WIRE_SLAVE_ADDR: u16 = 0x8005;
pub const MDIO_PMA_REG_8727_TWO_WIRE_DATA_BUF: u16 = 0x8007;
pub const MDIO_PMA_REG_8727_TWO_WIRE_DATA_MASK: u16 = 0xff;
pub const MDIO_PMA_REG_8727_TX_CTRL1: u16 = 0xca02;
pub const MDIO_PMA_REG_8727_TX_CTRL2: u16 = 0xca05;
pub const MDIO_PMA_REG_8727_PCS_OPT_CTRL: u16 = 0xc808;
pub const MDIO_PMA_REG_8727_GPIO_CTRL: u16 = 0xc80e;
pub const MDIO_PMA_REG_8727_PCS_GP: u16 = 0xc842;
pub const MDIO_PMA_REG_8727_OPT_CFG_REG: u16 = 0xc8e4;

pub const MDIO_PMA_REG_8481_PMD_SIGNAL: u16 = 0xa811;
pub const MDIO_PMA_REG_8481_LED1_MASK: u16 = 0xa82c;
pub const MDIO_PMA_REG_8481_LED2_MASK: u16 = 0xa82f;
pub const MDIO_PMA_REG_8481_LED3_MASK: u16 = 0xa832;
pub const MDIO_PMA_REG_8481_LED3_BLINK: u16 = 0xa834;
pub const MDIO_PMA_REG_8481_LED5_MASK: u16 = 0xa838;
pub const MDIO_PMA_REG_8481_LINK_SIGNAL: u16 = 0xa83b;
pub const MDIO_PMA_REG_8481_LINK_SIGNAL_LED4_ENABLE_MASK: u16 = 0x800;
pub const MDIO_PMA_REG_8481_LINK_SIGNAL_LED4_ENABLE_SHIFT: u16 = 11;
pub const MDIO_PMA_REG_84823_CTL_LED_CTL_1: u16 = 0xa8e3;
pub const MDIO_PMA_REG_84823_LED3_STRETCH_EN: u16 = 0x0080;

// WIS
pub const MDIO_WIS_REG_LASI_CNTL: u16 = 0x9002;
pub const MDIO_WIS_REG_LASI_STATUS: u16 = 0x9005;

// PCS
pub const MDIO_PCS_REG_STATUS: u16 = 0x0020;
pub const MDIO_PCS_REG_LASI_STATUS: u16 = 0x9005;

// XS
pub const MDIO_XS_PLL_SEQUENCER: u16 = 0x8000;
pub const MDIO_XS_SFX7101_XGXS_TEST1: u16 = 0xc00a;
pub const MDIO_XS_8706_REG_BANK_RX0: u16 = 0x80bc;
pub const MDIO_XS_8706_REG_BANK_RX1: u16 = 0x80cc;
pub const MDIO_XS_8706_REG_BANK_RXA: u16 = 0x80fc;
pub const MDIO_XS_REG_8073_RX_CTRL_PCIE: u16 = 0x80fa;

// Auto-negotiation
pub const MDIO_AN_REG_CTRL: u16 = 0x0000;
pub const MDIO_AN_REG_STATUS: u16 = 0x0001;
pub const MDIO_AN_REG_STATUS_AN_COMPLETE: u16 = 0x0020;
pub const MDIO_AN_REG_ADV_PAUSE: u16 = 0x0010;
pub const MDIO_AN_REG_ADV_PAUSE_PAUSE: u16 = 0x0400;
pub const MDIO_AN_REG_ADV_PAUSE_ASYMMETRIC: u16 = 0x0800;
pub const MDIO_AN_REG_ADV_PAUSE_BOTH: u16 = 0x0c00;
pub const MDIO_AN_REG_ADV_PAUSE_MASK: u16 = 0x0c00;
pub const MDIO_AN_REG_ADV: u16 = 0x0011;
pub const MDIO_AN_REG_ADV2: u16 = 0x0012;
pub const MDIO_AN_REG_LP_AUTO_NEG: u16 = 0x0013;
pub const MDIO_AN_REG_MASTER_STATUS: u16 = 0x0021;
pub const MDIO_AN_REG_LINK_STATUS: u16 = 0x8304;
pub const MDIO_AN_REG_CL37_CL73: u16 = 0x8370;
pub const MDIO_AN_REG_CL37_AN: u16 = 0xffe0;
pub const MDIO_AN_REG_CL37_FC_LD: u16 = 0xffe4;
pub const MDIO_AN_REG_CL37_FC_LP: u16 = 0xffe5;
pub const MDIO_AN_REG_8073_2_5G: u16 = 0x8329;
pub const MDIO_AN_REG_8073_BAM: u16 = 0x8350;
pub const MDIO_AN_REG_8727_MISC_CTRL: u16 = 0x8309;

pub const MDIO_AN_REG_8481_10GBASE_T_AN_CTRL: u16 = 0x0020;
pub const MDIO_AN_REG_8481_LEGACY_MII_CTRL: u16 = 0xffe0;
pub const MDIO_AN_REG_8481_LEGACY_MII_STATUS: u16 = 0xffe1;
pub const MDIO_AN_REG_8481_LEGACY_AN_ADV: u16 = 0xffe4;
pub const MDIO_AN_REG_8481_LEGACY_AN_EXPANSION: u16 = 0xffe6;
pub const MDIO_AN_REG_8481_1000T_CTRL: u16 = 0xffe9;
pub const MDIO_AN_REG_8481_EXPANSION_REG_RD_RW: u16 = 0xfff5;
pub const MDIO_AN_REG_8481_EXPANSION_REG_ACCESS: u16 = 0xfff7;
pub const MDIO_AN_REG_8481_AUX_CTRL: u16 = 0xfff8;
pub const MDIO_AN_REG_848XX_INT_MASK: u16 = 0xfffb;

// Vendor control device
pub const MDIO_CTL_REG_84823_MEDIA: u16 = 0x401a;
pub const MDIO_CTL_REG_84823_MEDIA_MAC_MASK: u16 = 0x0018;
pub const MDIO_CTL_REG_84823_CTRL_MAC_XFI: u16 = 0x0008;
pub const MDIO_CTL_REG_84823_MEDIA_LINE_MASK: u16 = 0x0060;
pub const MDIO_CTL_REG_84823_MEDIA_LINE_XAUI_L: u16 = 0x0020;
pub const MDIO_CTL_REG_84823_MEDIA_COPPER_CORE_DOWN: u16 = 0x0080;
pub const MDIO_CTL_REG_84823_MEDIA_PRIORITY_MASK: u16 = 0x0100;
pub const MDIO_CTL_REG_84823_MEDIA_PRIORITY_COPPER: u16 = 0x0000;
pub const MDIO_CTL_REG_84823_MEDIA_PRIORITY_FIBER: u16 = 0x0100;
pub const MDIO_CTL_REG_84823_MEDIA_FIBER_1G: u16 = 0x1000;
pub const MDIO_CTL_REG_84823_USER_CTRL_REG: u16 = 0x4005;
pub const MDIO_CTL_REG_84823_USER_CTRL_CMS: u16 = 0x0080;

// SFP+ module EEPROM
pub const SFP_EEPROM_CON_TYPE_ADDR: u16 = 0x2;
pub const SFP_EEPROM_CON_TYPE_VAL_LC: u8 = 0x7;
pub const SFP_EEPROM_CON_TYPE_VAL_COPPER: u8 = 0x21;
pub const SFP_EEPROM_COMP_CODE_ADDR: u16 = 0x3;
pub const SFP_EEPROM_COMP_CODE_SR_MASK: u8 = 1 << 4;
pub const SFP_EEPROM_COMP_CODE_LR_MASK: u8 = 1 << 5;
pub const SFP_EEPROM_COMP_CODE_LRM_MASK: u8 = 1 << 6;
pub const SFP_EEPROM_FC_TX_TECH_ADDR: u16 = 0x8;
pub const SFP_EEPROM_FC_TX_TECH_BITMASK_COPPER_PASSIVE: u8 = 0x4;
pub const SFP_EEPROM_FC_TX_TECH_BITMASK_COPPER_ACTIVE: u8 = 0x8;
pub const SFP_EEPROM_VENDOR_NAME_ADDR: u16 = 0x14;
pub const SFP_EEPROM_VENDOR_NAME_SIZE: usize = 16;
pub const SFP_EEPROM_PART_NO_ADDR: u16 = 0x28;
pub const SFP_EEPROM_PART_NO_SIZE: usize = 16;
pub const SFP_EEPROM_OPTIONS_ADDR: u16 = 0x40;
pub const SFP_EEPROM_OPTIONS_LINEAR_RX_OUT_MASK: u8 = 0x1;
pub const SFP_EEPROM_OPTIONS_SIZE: usize = 2;
pub const SFP_EEPROM_PAGE_SIZE: usize = 16;

pub const EDC_MODE_LINEAR: u16 = 0x0022;
pub const EDC_MODE_LIMITING: u16 = 0x0044;
pub const EDC_MODE_PASSIVE_DAC: u16 = 0x0055;

// SFP two-wire bridge
pub const MDIO_PMA_REG_SFP_TWO_WIRE_CTRL: u16 = 0x8000;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_CTRL_STATUS_MASK: u16 = 0x000c;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_IDLE: u16 = 0x0000;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_COMPLETE: u16 = 0x0004;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_IN_PROGRESS: u16 = 0x0008;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_FAILED: u16 = 0x000c;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_BYTE_CNT: u16 = 0x8002;
pub const MDIO_PMA_REG_SFP_TWO_WIRE_MEM_ADDR: u16 = 0x8003;
