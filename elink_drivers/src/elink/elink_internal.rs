//! Internal SerDes (1G) and XGXS (10G) PHYs.
//!
//! Both are reached through clause 22 register banks tunnelled over clause 45
//! at the default device address of the port.

use super::{
    elink_hw::{
        msleep, Duplex, ElinkHost, EventLog, FlowCtrl, LoopbackMode, MacType, Params, Phy,
        PhyIndex, PhyModeFlags, Vars, SPEED_10, SPEED_100, SPEED_1000, SPEED_10000,
        SPEED_12000, SPEED_12500, SPEED_13000, SPEED_15000, SPEED_16000, SPEED_2500,
        SPEED_AUTO_NEG,
    },
    elink_operations::{
        apply_pause_result, calc_ieee_aneg_adv, cl22_read, cl22_write, cl45_read, cl45_write,
        PhyOperations,
    },
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::boxed::Box;

pub struct SerdesPhy;

impl SerdesPhy {
    fn new() -> Self {
        Self
    }
}

pub struct XgxsPhy;

impl XgxsPhy {
    fn new() -> Self {
        Self
    }
}

pub fn get_serdes() -> Box<dyn PhyOperations> {
    let ops = SerdesPhy::new();
    Box::new(ops)
}

pub fn get_xgxs() -> Box<dyn PhyOperations> {
    let ops = XgxsPhy::new();
    Box::new(ops)
}

impl PhyOperations for SerdesPhy {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        vars.phy_flags |= PhyModeFlags::SGMII;
        vars.ieee_fc = calc_ieee_aneg_adv(phy.req_flow_ctrl, params.req_fc_auto_adv);

        set_aer_mmd_serdes(host, phy)?;
        reset_unicore(host, phy, params, true)?;
        set_aer_mmd_serdes(host, phy)
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        link_settings_status(host, phy, params, vars)
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        int_link_reset(host, params);
        Ok(())
    }
}

impl PhyOperations for XgxsPhy {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        vars.phy_flags = PhyModeFlags::XGXS;

        let sgmii = if phy.req_line_speed != SPEED_AUTO_NEG {
            phy.req_line_speed == SPEED_100 || phy.req_line_speed == SPEED_10
        } else {
            phy.speed_cap_mask >= PORT_HW_CFG_SPEED_CAPABILITY_D0_10M_FULL
                && phy.speed_cap_mask < PORT_HW_CFG_SPEED_CAPABILITY_D0_1G
        };
        vars.phy_flags.set(PhyModeFlags::SGMII, sgmii);

        vars.ieee_fc = calc_ieee_aneg_adv(phy.req_flow_ctrl, params.req_fc_auto_adv);

        set_aer_mmd_xgxs(host, phy, params)?;
        set_master_ln(host, phy, params)?;

        reset_unicore(host, phy, params, false)?;

        set_aer_mmd_xgxs(host, phy, params)?;

        // The reset clears the master lane.
        set_master_ln(host, phy, params)?;
        set_swap_lanes(host, phy, params)
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        link_settings_status(host, phy, params, vars)
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        int_link_reset(host, params);
        Ok(())
    }

    fn config_loopback(
        &self,
        phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        set_xgxs_loopback(host, phy, params)
    }
}

fn set_aer_mmd_xgxs(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let offset = phy.addr as u16 + params.master_lane();
    let aer_val = if params.chip_id.is_e2() {
        0x3800 + offset - 1
    } else {
        0x3800 + offset
    };

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_AER_BLOCK,
        MDIO_AER_BLOCK_AER_REG,
        aer_val,
    )
}

fn set_aer_mmd_serdes(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_AER_BLOCK,
        MDIO_AER_BLOCK_AER_REG,
        0x3800,
    )
}

/// Toggle the SerDes MDIO interface through clause 22 and back to clause 45.
fn set_serdes_access(host: &mut dyn ElinkHost, port: u8) {
    let emac_base = if port != 0 {
        GRCBASE_EMAC1
    } else {
        GRCBASE_EMAC0
    };
    let port = port as u32;

    host.reg_write(NIG_REG_SERDES0_CTRL_MD_ST + port * 0x10, 1);
    host.reg_write(emac_base + EMAC_REG_EMAC_MDIO_COMM, 0x245f8000);
    host.udelay(500);
    host.reg_write(emac_base + EMAC_REG_EMAC_MDIO_COMM, 0x245d000f);
    host.udelay(500);
    host.reg_write(NIG_REG_SERDES0_CTRL_MD_ST + port * 0x10, 0);
}

pub fn serdes_deassert(host: &mut dyn ElinkHost, port: u8) {
    log::debug!("elink: serdes deassert port {}", port);

    let val = SERDES_RESET_BITS << (port as u32 * 16);

    host.reg_write(GRCBASE_MISC + MISC_REGISTERS_RESET_REG_3_CLEAR, val);
    host.udelay(500);
    host.reg_write(GRCBASE_MISC + MISC_REGISTERS_RESET_REG_3_SET, val);

    set_serdes_access(host, port);

    host.reg_write(
        NIG_REG_SERDES0_CTRL_MD_DEVAD + port as u32 * 0x10,
        DEFAULT_PHY_DEV_ADDR as u32,
    );
}

pub fn xgxs_deassert(host: &mut dyn ElinkHost, params: &Params) {
    let port = params.port as u32;
    log::debug!("elink: xgxs deassert port {}", port);

    let val = XGXS_RESET_BITS << (port * 16);

    host.reg_write(GRCBASE_MISC + MISC_REGISTERS_RESET_REG_3_CLEAR, val);
    host.udelay(500);
    host.reg_write(GRCBASE_MISC + MISC_REGISTERS_RESET_REG_3_SET, val);

    host.reg_write(NIG_REG_XGXS0_CTRL_MD_ST + port * 0x18, 0);
    host.reg_write(
        NIG_REG_XGXS0_CTRL_MD_DEVAD + port * 0x18,
        params.phy(PhyIndex::Internal).def_md_devad as u32,
    );
}

fn set_master_ln(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let master_ln = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_XGXS_BLOCK2,
        MDIO_XGXS_BLOCK2_TEST_MODE_LANE,
    )?;

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_XGXS_BLOCK2,
        MDIO_XGXS_BLOCK2_TEST_MODE_LANE,
        master_ln | params.master_lane(),
    )
}

/// reset_unicore - Reset the unicore and wait for the reset bit to self clear
fn reset_unicore(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    set_serdes: bool,
) -> Result<(), ElinkDriverErr> {
    let mii_control = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
    )?;

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
        mii_control | MDIO_COMBO_IEEO_MII_CONTROL_RESET,
    )?;

    if set_serdes {
        set_serdes_access(host, params.port);
    }

    for _ in 0..MDIO_ACCESS_TIMEOUT {
        host.udelay(5);

        let mii_control = cl22_read(
            host,
            phy,
            MDIO_REG_BANK_COMBO_IEEE0,
            MDIO_COMBO_IEEE0_MII_CONTROL,
        )?;
        if mii_control & MDIO_COMBO_IEEO_MII_CONTROL_RESET == 0 {
            host.udelay(5);
            return Ok(());
        }
    }

    host.event_log(EventLog::PhyUninitialized { port: params.port });
    log::error!("elink: XGXS is still in reset");
    Err(ElinkDriverErr::Timeout)
}

fn set_swap_lanes(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let rx_lane_swap = params.rx_lane_swap();
    let tx_lane_swap = params.tx_lane_swap();

    let rx_val = if rx_lane_swap != LANE_SWAP_NONE {
        rx_lane_swap
            | MDIO_XGXS_BLOCK2_RX_LN_SWAP_ENABLE
            | MDIO_XGXS_BLOCK2_RX_LN_SWAP_FORCE_ENABLE
    } else {
        0
    };
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_XGXS_BLOCK2,
        MDIO_XGXS_BLOCK2_RX_LN_SWAP,
        rx_val,
    )?;

    let tx_val = if tx_lane_swap != LANE_SWAP_NONE {
        tx_lane_swap | MDIO_XGXS_BLOCK2_TX_LN_SWAP_ENABLE
    } else {
        0
    };
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_XGXS_BLOCK2,
        MDIO_XGXS_BLOCK2_TX_LN_SWAP,
        tx_val,
    )
}

pub fn set_parallel_detection(
    host: &mut dyn ElinkHost,
    phy: &Phy,
) -> Result<(), ElinkDriverErr> {
    let mut control2 = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL2,
    )?;
    if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_1G != 0 {
        control2 |= MDIO_SERDES_DIGITAL_A_1000X_CONTROL2_PRL_DT_EN;
    } else {
        control2 &= !MDIO_SERDES_DIGITAL_A_1000X_CONTROL2_PRL_DT_EN;
    }
    log::debug!(
        "elink: phy cap mask 0x{:x} control2 0x{:x}",
        phy.speed_cap_mask,
        control2
    );
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL2,
        control2,
    )?;

    if phy.phy_type.is_internal()
        && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G != 0
    {
        log::debug!("elink: XGXS");

        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_10G_PARALLEL_DETECT,
            MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_LINK,
            MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_LINK_CNT,
        )?;

        let control = cl22_read(
            host,
            phy,
            MDIO_REG_BANK_10G_PARALLEL_DETECT,
            MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_CONTROL,
        )?;
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_10G_PARALLEL_DETECT,
            MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_CONTROL,
            control | MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_CONTROL_PARDET10G_EN,
        )?;

        // Disable parallel detection of HiG.
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_XGXS_BLOCK2,
            MDIO_XGXS_BLOCK2_UNICORE_MODE_10G,
            MDIO_XGXS_BLOCK2_UNICORE_MODE_10G_CX4_XGXS
                | MDIO_XGXS_BLOCK2_UNICORE_MODE_10G_HIGIG_XGXS,
        )?;
    }

    Ok(())
}

fn set_autoneg(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    vars: &Vars,
    enable_cl73: bool,
) -> Result<(), ElinkDriverErr> {
    let autoneg = vars.line_speed == SPEED_AUTO_NEG;

    // CL37
    let mut reg_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
    )?;
    if autoneg {
        reg_val |= MDIO_COMBO_IEEO_MII_CONTROL_AN_EN;
    } else {
        reg_val &= !(MDIO_COMBO_IEEO_MII_CONTROL_AN_EN | MDIO_COMBO_IEEO_MII_CONTROL_RESTART_AN);
    }
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
        reg_val,
    )?;

    // Autodetection
    let mut reg_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL1,
    )?;
    reg_val &= !(MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_SIGNAL_DETECT_EN
        | MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_INVERT_SIGNAL_DETECT);
    reg_val |= MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_FIBER_MODE;
    if autoneg {
        reg_val |= MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_AUTODET;
    } else {
        reg_val &= !MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_AUTODET;
    }
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL1,
        reg_val,
    )?;

    // TetonII and BAM
    let mut reg_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_BAM_NEXT_PAGE,
        MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL,
    )?;
    let bam = MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL_BAM_MODE
        | MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL_TETON_AN;
    if autoneg {
        reg_val |= bam;
    } else {
        reg_val &= !bam;
    }
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_BAM_NEXT_PAGE,
        MDIO_BAM_NEXT_PAGE_MP5_NEXT_PAGE_CTRL,
        reg_val,
    )?;

    let an_control = if enable_cl73 {
        // CL73 FSM status bits
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_CL73_USERB0,
            MDIO_CL73_USERB0_CL73_UCTRL,
            0xe,
        )?;

        // BAM station manager
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_CL73_USERB0,
            MDIO_CL73_USERB0_CL73_BAM_CTRL1,
            MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_EN
                | MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_STATION_MNGR_EN
                | MDIO_CL73_USERB0_CL73_BAM_CTRL1_BAM_NP_AFTER_BP_EN,
        )?;

        let mut adv2 = cl22_read(
            host,
            phy,
            MDIO_REG_BANK_CL73_IEEEB1,
            MDIO_CL73_IEEEB1_AN_ADV2,
        )?;
        if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G != 0 {
            adv2 |= MDIO_CL73_IEEEB1_AN_ADV2_ADVR_10G_KX4;
        }
        if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_1G != 0 {
            adv2 |= MDIO_CL73_IEEEB1_AN_ADV2_ADVR_1000M_KX;
        }
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_CL73_IEEEB1,
            MDIO_CL73_IEEEB1_AN_ADV2,
            adv2,
        )?;

        MDIO_CL73_IEEEB0_CL73_AN_CONTROL_AN_EN
    } else {
        0
    };

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_CL73_IEEEB0,
        MDIO_CL73_IEEEB0_CL73_AN_CONTROL,
        an_control,
    )
}

/// program_serdes - Forced speed and duplex
fn program_serdes(host: &mut dyn ElinkHost, phy: &Phy, vars: &Vars) -> Result<(), ElinkDriverErr> {
    let mut reg_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
    )?;
    reg_val &= !(MDIO_COMBO_IEEO_MII_CONTROL_FULL_DUPLEX
        | MDIO_COMBO_IEEO_MII_CONTROL_AN_EN
        | MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_MASK);
    if phy.req_duplex == Duplex::Full {
        reg_val |= MDIO_COMBO_IEEO_MII_CONTROL_FULL_DUPLEX;
    }
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
        reg_val,
    )?;

    // Speed is programmed only above 1G.
    let mut reg_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_MISC1,
    )?;
    reg_val &=
        !(MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_MASK | MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_SEL);

    if !matches!(vars.line_speed, SPEED_1000 | SPEED_100 | SPEED_10) {
        reg_val |=
            MDIO_SERDES_DIGITAL_MISC1_REFCLK_SEL_156_25M | MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_SEL;
        if vars.line_speed == SPEED_10000 {
            reg_val |= MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_10G_CX4;
        }
        if vars.line_speed == SPEED_13000 {
            reg_val |= MDIO_SERDES_DIGITAL_MISC1_FORCE_SPEED_13G;
        }
    }

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_MISC1,
        reg_val,
    )
}

/// Advertise 2.5G and 10G over the 48 bits of BAM.
fn set_brcm_cl37_advertisment(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    let mut val = 0;
    if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_2_5G != 0 {
        val |= MDIO_OVER_1G_UP1_2_5G;
    }
    if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G != 0 {
        val |= MDIO_OVER_1G_UP1_10G;
    }
    cl22_write(host, phy, MDIO_REG_BANK_OVER_1G, MDIO_OVER_1G_UP1, val)?;
    cl22_write(host, phy, MDIO_REG_BANK_OVER_1G, MDIO_OVER_1G_UP3, 0x400)
}

fn set_ieee_aneg_advertisment(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    ieee_fc: u16,
) -> Result<(), ElinkDriverErr> {
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_AUTO_NEG_ADV,
        ieee_fc,
    )?;

    let mut val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_CL73_IEEEB1,
        MDIO_CL73_IEEEB1_AN_ADV1,
    )?;
    val &= !MDIO_CL73_IEEEB1_AN_ADV1_PAUSE_BOTH;
    val |= (ieee_fc << 3) & MDIO_CL73_IEEEB1_AN_ADV1_PAUSE_MASK;
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_CL73_IEEEB1,
        MDIO_CL73_IEEEB1_AN_ADV1,
        val,
    )
}

fn restart_autoneg(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    enable_cl73: bool,
) -> Result<(), ElinkDriverErr> {
    if enable_cl73 {
        let an_control = cl22_read(
            host,
            phy,
            MDIO_REG_BANK_CL73_IEEEB0,
            MDIO_CL73_IEEEB0_CL73_AN_CONTROL,
        )?;
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_CL73_IEEEB0,
            MDIO_CL73_IEEEB0_CL73_AN_CONTROL,
            an_control
                | MDIO_CL73_IEEEB0_CL73_AN_CONTROL_AN_EN
                | MDIO_CL73_IEEEB0_CL73_AN_CONTROL_RESTART_AN,
        )
    } else {
        let mii_control = cl22_read(
            host,
            phy,
            MDIO_REG_BANK_COMBO_IEEE0,
            MDIO_COMBO_IEEE0_MII_CONTROL,
        )?;
        log::debug!("elink: restart CL37 autoneg mii_control 0x{:x}", mii_control);
        cl22_write(
            host,
            phy,
            MDIO_REG_BANK_COMBO_IEEE0,
            MDIO_COMBO_IEEE0_MII_CONTROL,
            mii_control | MDIO_COMBO_IEEO_MII_CONTROL_AN_EN | MDIO_COMBO_IEEO_MII_CONTROL_RESTART_AN,
        )
    }
}

/// In SGMII mode the unicore is always the slave.
fn initialize_sgmii_process(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    vars: &Vars,
) -> Result<(), ElinkDriverErr> {
    let mut control1 = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL1,
    )?;
    control1 |= MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_INVERT_SIGNAL_DETECT;
    control1 &= !(MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_FIBER_MODE
        | MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_AUTODET
        | MDIO_SERDES_DIGITAL_A_1000X_CONTROL1_MSTR_MODE);
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_CONTROL1,
        control1,
    )?;

    if vars.line_speed == SPEED_AUTO_NEG {
        return restart_autoneg(host, phy, false);
    }

    let mut mii_control = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
    )?;
    mii_control &= !(MDIO_COMBO_IEEO_MII_CONTROL_AN_EN
        | MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_MASK
        | MDIO_COMBO_IEEO_MII_CONTROL_FULL_DUPLEX);

    match vars.line_speed {
        SPEED_100 => mii_control |= MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_100,
        SPEED_1000 => mii_control |= MDIO_COMBO_IEEO_MII_CONTROL_MAN_SGMII_SP_1000,
        SPEED_10 => (),
        speed => log::debug!("elink: invalid SGMII line_speed {}", speed),
    }

    if phy.req_duplex == Duplex::Full {
        mii_control |= MDIO_COMBO_IEEO_MII_CONTROL_FULL_DUPLEX;
    }
    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_COMBO_IEEE0,
        MDIO_COMBO_IEEE0_MII_CONTROL,
        mii_control,
    )
}

fn direct_parallel_detect_used(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<bool, ElinkDriverErr> {
    if phy.req_line_speed != SPEED_AUTO_NEG {
        return Ok(false);
    }

    // Latched, read twice.
    cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_STATUS2,
    )?;
    let status2_1000x = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_SERDES_DIGITAL,
        MDIO_SERDES_DIGITAL_A_1000X_STATUS2,
    )?;
    if status2_1000x & MDIO_SERDES_DIGITAL_A_1000X_STATUS2_AN_DISABLED != 0 {
        log::debug!("elink: 1G parallel detect link on port {}", params.port);
        return Ok(true);
    }

    let pd_10g = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_10G_PARALLEL_DETECT,
        MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_STATUS,
    )?;
    if pd_10g & MDIO_10G_PARALLEL_DETECT_PAR_DET_10G_STATUS_PD_LINK != 0 {
        log::debug!("elink: 10G parallel detect link on port {}", params.port);
        return Ok(true);
    }

    Ok(false)
}

/// flow_ctrl_resolve - Resolve pause from the CL73 or CL37 pages once AN completes
fn flow_ctrl_resolve(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
    gp_status: u16,
) -> Result<(), ElinkDriverErr> {
    vars.flow_ctrl = FlowCtrl::None;

    if phy.req_flow_ctrl != FlowCtrl::Auto {
        vars.flow_ctrl = phy.req_flow_ctrl;
    } else if phy.req_line_speed != SPEED_AUTO_NEG {
        vars.flow_ctrl = params.req_fc_auto_adv;
    } else if gp_status & MDIO_AN_CL73_OR_37_COMPLETE != 0
        && !vars.phy_flags.contains(PhyModeFlags::SGMII)
    {
        if direct_parallel_detect_used(host, phy, params)? {
            vars.flow_ctrl = params.req_fc_auto_adv;
            return Ok(());
        }

        let cl73_done = MDIO_GP_STATUS_TOP_AN_STATUS1_CL73_AUTONEG_COMPLETE
            | MDIO_GP_STATUS_TOP_AN_STATUS1_CL73_MR_LP_NP_AN_ABLE;

        let pause_result = if gp_status & cl73_done == cl73_done {
            let ld_pause = cl22_read(
                host,
                phy,
                MDIO_REG_BANK_CL73_IEEEB1,
                MDIO_CL73_IEEEB1_AN_ADV1,
            )?;
            let lp_pause = cl22_read(
                host,
                phy,
                MDIO_REG_BANK_CL73_IEEEB1,
                MDIO_CL73_IEEEB1_AN_LP_ADV1,
            )?;
            let result = ((ld_pause & MDIO_CL73_IEEEB1_AN_ADV1_PAUSE_MASK) >> 8)
                | ((lp_pause & MDIO_CL73_IEEEB1_AN_LP_ADV1_PAUSE_MASK) >> 10);
            log::debug!("elink: pause_result CL73 0x{:x}", result);
            result
        } else {
            let ld_pause = cl22_read(
                host,
                phy,
                MDIO_REG_BANK_COMBO_IEEE0,
                MDIO_COMBO_IEEE0_AUTO_NEG_ADV,
            )?;
            let lp_pause = cl22_read(
                host,
                phy,
                MDIO_REG_BANK_COMBO_IEEE0,
                MDIO_COMBO_IEEE0_AUTO_NEG_LINK_PARTNER_ABILITY1,
            )?;
            let result = ((ld_pause & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_MASK) >> 5)
                | ((lp_pause & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_MASK) >> 7);
            log::debug!("elink: pause_result CL37 0x{:x}", result);
            result
        };

        apply_pause_result(vars, pause_result as u32);
    }

    log::debug!("elink: flow_ctrl {:?}", vars.flow_ctrl);
    Ok(())
}

/// check_fallback_to_cl37 - Drop CL73 when the partner only speaks CL37 BAM
///
/// Signal detect, a stable CL73 state machine and received CL37 message pages
/// must all be present. Any missing condition leaves CL73 running until the next call.
fn check_fallback_to_cl37(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    let rx_status = cl22_read(host, phy, MDIO_REG_BANK_RX0, MDIO_RX0_RX_STATUS)?;
    if rx_status & MDIO_RX0_RX_STATUS_SIGDET != MDIO_RX0_RX_STATUS_SIGDET {
        log::debug!(
            "elink: signal is not detected, restoring CL73 rx_status 0x{:x}",
            rx_status
        );
        return cl22_write(
            host,
            phy,
            MDIO_REG_BANK_CL73_IEEEB0,
            MDIO_CL73_IEEEB0_CL73_AN_CONTROL,
            MDIO_CL73_IEEEB0_CL73_AN_CONTROL_AN_EN,
        );
    }

    let ustat_val = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_CL73_USERB0,
        MDIO_CL73_USERB0_CL73_USTAT1,
    )?;
    let ustat_good = MDIO_CL73_USERB0_CL73_USTAT1_LINK_STATUS_CHECK
        | MDIO_CL73_USERB0_CL73_USTAT1_AN_GOOD_CHECK_BAM37;
    if ustat_val & ustat_good != ustat_good {
        log::debug!(
            "elink: CL73 state machine is not stable ustat_val 0x{:x}",
            ustat_val
        );
        return Ok(());
    }

    let cl37_fsm_received = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_REMOTE_PHY,
        MDIO_REMOTE_PHY_MISC_RX_STATUS,
    )?;
    let cl37_msgs = MDIO_REMOTE_PHY_MISC_RX_STATUS_CL37_FSM_RECEIVED_OVER1G_MSG
        | MDIO_REMOTE_PHY_MISC_RX_STATUS_CL37_FSM_RECEIVED_BRCM_OUI_MSG;
    if cl37_fsm_received & cl37_msgs != cl37_msgs {
        log::debug!(
            "elink: no CL37 FSM were received misc_rx_status 0x{:x}",
            cl37_fsm_received
        );
        return Ok(());
    }

    cl22_write(
        host,
        phy,
        MDIO_REG_BANK_CL73_IEEEB0,
        MDIO_CL73_IEEEB0_CL73_AN_CONTROL,
        0,
    )?;
    restart_autoneg(host, phy, false)?;
    log::debug!("elink: disabling CL73, restarting CL37 autoneg");
    Ok(())
}

fn xgxs_an_resolve(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
    gp_status: u16,
) -> Result<(), ElinkDriverErr> {
    if gp_status & MDIO_AN_CL73_OR_37_COMPLETE != 0 {
        vars.link_status |= LINK_STATUS_AUTO_NEGOTIATE_COMPLETE;
    }

    if direct_parallel_detect_used(host, phy, params)? {
        vars.link_status |= LINK_STATUS_PARALLEL_DETECTION_USED;
    }

    Ok(())
}

/// Speed and link_status code of a gp_status speed field.
fn gp_status_speed(gp_status: u16, duplex: Duplex) -> Option<(u16, u32)> {
    let full = duplex == Duplex::Full;
    let pick = |fd: u32, hd: u32| if full { fd } else { hd };

    let ret = match gp_status & MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_MASK {
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10M => (
            SPEED_10,
            pick(
                LINK_STATUS_SPEED_AND_DUPLEX_10TFD,
                LINK_STATUS_SPEED_AND_DUPLEX_10THD,
            ),
        ),
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_100M => (
            SPEED_100,
            pick(
                LINK_STATUS_SPEED_AND_DUPLEX_100TXFD,
                LINK_STATUS_SPEED_AND_DUPLEX_100TXHD,
            ),
        ),
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G
        | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G_KX => (
            SPEED_1000,
            pick(
                LINK_STATUS_SPEED_AND_DUPLEX_1000TFD,
                LINK_STATUS_SPEED_AND_DUPLEX_1000THD,
            ),
        ),
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_2_5G => (
            SPEED_2500,
            pick(
                LINK_STATUS_SPEED_AND_DUPLEX_2500TFD,
                LINK_STATUS_SPEED_AND_DUPLEX_2500THD,
            ),
        ),
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_KX4
        | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_HIG
        | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_CX4 => {
            (SPEED_10000, LINK_STATUS_SPEED_AND_DUPLEX_10GTFD)
        }
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_12G_HIG => {
            (SPEED_12000, LINK_STATUS_SPEED_AND_DUPLEX_12GTFD)
        }
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_12_5G => {
            (SPEED_12500, LINK_STATUS_SPEED_AND_DUPLEX_12_5GTFD)
        }
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_13G => {
            (SPEED_13000, LINK_STATUS_SPEED_AND_DUPLEX_13GTFD)
        }
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_15G => {
            (SPEED_15000, LINK_STATUS_SPEED_AND_DUPLEX_15GTFD)
        }
        MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_16G => {
            (SPEED_16000, LINK_STATUS_SPEED_AND_DUPLEX_16GTFD)
        }
        // 5G, 6G and reserved codes
        _ => return None,
    };

    Some(ret)
}

/// link_settings_status - Decode gp_status of the internal PHY into `vars`
fn link_settings_status(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<bool, ElinkDriverErr> {
    let gp_status = cl22_read(
        host,
        phy,
        MDIO_REG_BANK_GP_STATUS,
        MDIO_GP_STATUS_TOP_AN_STATUS1,
    )?;

    if phy.req_line_speed == SPEED_AUTO_NEG {
        vars.link_status |= LINK_STATUS_AUTO_NEGOTIATE_ENABLED;
    }

    if gp_status & MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS != 0 {
        log::debug!("elink: phy link up gp_status 0x{:x}", gp_status);

        vars.phy_link_up = true;
        vars.link_status |= LINK_STATUS_LINK_UP;
        vars.duplex = if gp_status & MDIO_GP_STATUS_TOP_AN_STATUS1_DUPLEX_STATUS != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        if params.single_media() {
            flow_ctrl_resolve(host, phy, params, vars, gp_status)?;
            if phy.req_line_speed == SPEED_AUTO_NEG {
                xgxs_an_resolve(host, phy, params, vars, gp_status)?;
            }
        }

        let Some((line_speed, speed_code)) = gp_status_speed(gp_status, vars.duplex) else {
            log::debug!("elink: link speed unsupported gp_status 0x{:x}", gp_status);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        };

        vars.link_status |= speed_code;
        vars.line_speed = line_speed;
    } else {
        log::debug!("elink: phy link down");

        vars.phy_link_up = false;
        vars.duplex = Duplex::Full;
        vars.flow_ctrl = FlowCtrl::None;
        vars.mac_type = MacType::None;

        if phy.req_line_speed == SPEED_AUTO_NEG && params.single_media() {
            check_fallback_to_cl37(host, phy)?;
        }
    }

    log::debug!(
        "elink: gp_status 0x{:x} phy_link_up {} line_speed {} duplex {:?} flow_ctrl {:?} link_status 0x{:x}",
        gp_status,
        vars.phy_link_up,
        vars.line_speed,
        vars.duplex,
        vars.flow_ctrl,
        vars.link_status
    );

    Ok(vars.phy_link_up)
}

/// Copy the partner's preemphasis request into the four TX lanes.
pub fn set_gmii_tx_driver(host: &mut dyn ElinkHost, params: &Params) -> Result<(), ElinkDriverErr> {
    let phy = params.phy(PhyIndex::Internal);

    let lp_up2 = cl22_read(host, phy, MDIO_REG_BANK_OVER_1G, MDIO_OVER_1G_LP_UP2)?;

    // bits [10:7] of lp_up2 land in [15:12] of tx_driver
    let lp_up2 = ((lp_up2 & MDIO_OVER_1G_LP_UP2_PREEMPHASIS_MASK)
        >> MDIO_OVER_1G_LP_UP2_PREEMPHASIS_SHIFT)
        << MDIO_TX0_TX_DRIVER_PREEMPHASIS_SHIFT;

    if lp_up2 == 0 {
        return Ok(());
    }

    let step = MDIO_REG_BANK_TX1 - MDIO_REG_BANK_TX0;
    for bank in (MDIO_REG_BANK_TX0..=MDIO_REG_BANK_TX3).step_by(step as usize) {
        let mut tx_driver = cl22_read(host, phy, bank, MDIO_TX0_TX_DRIVER)?;

        if lp_up2 != tx_driver & MDIO_TX0_TX_DRIVER_PREEMPHASIS_MASK {
            tx_driver &= !MDIO_TX0_TX_DRIVER_PREEMPHASIS_MASK;
            tx_driver |= lp_up2;
            cl22_write(host, phy, bank, MDIO_TX0_TX_DRIVER, tx_driver)?;
        }
    }

    Ok(())
}

fn set_preemphasis(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    let rx_step = MDIO_REG_BANK_RX1 - MDIO_REG_BANK_RX0;
    for (i, bank) in (MDIO_REG_BANK_RX0..=MDIO_REG_BANK_RX3)
        .step_by(rx_step as usize)
        .enumerate()
    {
        cl22_write(host, phy, bank, MDIO_RX0_RX_EQ_BOOST, phy.rx_preemphasis[i])?;
    }

    let tx_step = MDIO_REG_BANK_TX1 - MDIO_REG_BANK_TX0;
    for (i, bank) in (MDIO_REG_BANK_TX0..=MDIO_REG_BANK_TX3)
        .step_by(tx_step as usize)
        .enumerate()
    {
        cl22_write(host, phy, bank, MDIO_TX0_TX_DRIVER, phy.tx_preemphasis[i])?;
    }

    Ok(())
}

/// init_internal_phy - Program autoneg or forced speed on the internal PHY
pub fn init_internal_phy(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &Vars,
) -> Result<(), ElinkDriverErr> {
    let enable_cl73 = params.single_media() || params.loopback_mode == LoopbackMode::Xgxs;

    if vars.phy_flags.contains(PhyModeFlags::SGMII) {
        log::debug!("elink: SGMII");
        return initialize_sgmii_process(host, phy, vars);
    }

    if params.single_media() && params.feature_config.override_preemphasis {
        set_preemphasis(host, phy)?;
    }

    if vars.line_speed != SPEED_AUTO_NEG
        || (params.single_media() && params.loopback_mode == LoopbackMode::Ext)
    {
        log::debug!("elink: not SGMII, no AN");

        set_autoneg(host, phy, vars, false)?;
        program_serdes(host, phy, vars)
    } else {
        log::debug!("elink: not SGMII, AN");

        set_brcm_cl37_advertisment(host, phy)?;
        set_ieee_aneg_advertisment(host, phy, vars.ieee_fc)?;
        set_autoneg(host, phy, vars, enable_cl73)?;
        restart_autoneg(host, phy, enable_cl73)
    }
}

/// Force the internal XGXS to 10G full duplex with autoneg off.
/// Used by external PHYs whose system side only runs at XFI/XAUI rate.
pub fn force_xgxs_10g(
    host: &mut dyn ElinkHost,
    params: &Params,
    vars: &Vars,
) -> Result<(), ElinkDriverErr> {
    let phy = params.phy(PhyIndex::Internal);

    let mut forced = *vars;
    forced.line_speed = SPEED_10000;
    forced.duplex = Duplex::Full;

    set_autoneg(host, phy, &forced, false)?;
    program_serdes(host, phy, &forced)
}

fn set_xgxs_loopback(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let port = params.port as u32;

    if phy.req_line_speed != SPEED_1000 {
        log::debug!("elink: XGXS 10G loopback enable");

        let md_devad = host.reg_read(NIG_REG_XGXS0_CTRL_MD_DEVAD + port * 0x18);
        host.reg_write(NIG_REG_XGXS0_CTRL_MD_DEVAD + port * 0x18, 0x5);

        cl45_write(
            host,
            phy,
            5,
            MDIO_REG_BANK_AER_BLOCK + (MDIO_AER_BLOCK_AER_REG & 0xf),
            0x2800,
        )?;
        cl45_write(
            host,
            phy,
            5,
            MDIO_REG_BANK_CL73_IEEEB0 + (MDIO_CL73_IEEEB0_CL73_AN_CONTROL & 0xf),
            0x6041,
        )?;
        msleep(host, 200);

        set_aer_mmd_xgxs(host, phy, params)?;
        host.reg_write(NIG_REG_XGXS0_CTRL_MD_DEVAD + port * 0x18, md_devad);
    } else {
        log::debug!("elink: XGXS 1G loopback enable");

        let reg = MDIO_REG_BANK_COMBO_IEEE0 + (MDIO_COMBO_IEEE0_MII_CONTROL & 0xf);
        let mii_ctrl = cl45_read(host, phy, 5, reg)?;
        cl45_write(
            host,
            phy,
            5,
            reg,
            mii_ctrl | MDIO_COMBO_IEEO_MII_CONTROL_LOOPBACK,
        )?;
    }

    Ok(())
}

fn int_link_reset(host: &mut dyn ElinkHost, params: &Params) {
    host.reg_write(
        GRCBASE_MISC + MISC_REGISTERS_RESET_REG_3_CLEAR,
        0x1ff << (params.port as u32 * 16),
    );
}
