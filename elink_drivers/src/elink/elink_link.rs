//! Port level link management.
//!
//! Cold bring-up, the interrupt driven reconciliation of the internal and
//! external PHYs, tear-down, LEDs and the path wide PHY initialization that
//! runs once per chip.

use super::{
    elink_8073::external_rom_boot_8073_8727,
    elink_hw::{
        bits_dis, is_10g_speed, msleep, ChipId, Duplex, ElinkHost, EventLog, FlowCtrl, GpioMode,
        LedMode, LoopbackMode, MacType, MediaType, Params, Phy, PhyFlags, PhyIndex, PhyModeFlags,
        PhySelection, PhyType, Supported, SwitchCfg, Vars, MAX_PHYS, SPEED_10, SPEED_100,
        SPEED_1000, SPEED_10000, SPEED_12000, SPEED_12500, SPEED_13000, SPEED_15000, SPEED_16000,
        SPEED_2500, SPEED_AUTO_NEG,
    },
    elink_internal::{
        init_internal_phy, serdes_deassert, set_gmii_tx_driver, set_parallel_detection,
        xgxs_deassert,
    },
    elink_mac::{
        bmac_enable, bmac_rx_disable, disable_emac, emac_enable, emac_init, emac_program,
        link_int_ack, link_int_enable, pbf_update, rearm_latch_signal, reset_bmac, set_nig_drain,
        update_mng, NIG_MASK_ALL_LINK,
    },
    elink_operations::{
        cl22_read, cl45_bits_dis, cl45_bits_en, cl45_read, cl45_write, ext_phy_hw_reset,
        get_operations, with_phy, PhySpecificAction,
    },
    elink_probe::populate_phy,
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::string::String;

const PORT_MAX: u8 = 2;

/// Populated external slots, in slot order.
fn ext_slots(num_phys: u8) -> impl Iterator<Item = PhyIndex> {
    PhyIndex::EXTERNAL
        .into_iter()
        .take((num_phys as usize).saturating_sub(1))
}

/// Copy the requested link settings of each logical slot into the PHY that
/// physically occupies it.
fn set_phy_vars(params: &mut Params, vars: &mut Vars) {
    let swapped = params.multi_phy_config.swapped;

    for idx in PhyIndex::ALL.into_iter().take(params.num_phys as usize) {
        let cfg_idx = idx.link_config_idx();
        let actual = idx.swapped(swapped);

        let req_flow_ctrl = params.req_flow_ctrl[cfg_idx];
        let req_line_speed = params.req_line_speed[cfg_idx];
        let speed_cap_mask = params.speed_cap_mask[cfg_idx];
        let req_duplex = params.req_duplex[cfg_idx];

        let phy = params.phy_mut(actual);
        phy.req_flow_ctrl = req_flow_ctrl;
        phy.req_line_speed = req_line_speed;
        phy.speed_cap_mask = speed_cap_mask;
        phy.req_duplex = req_duplex;

        if req_line_speed == SPEED_AUTO_NEG {
            vars.link_status |= LINK_STATUS_AUTO_NEGOTIATE_ENABLED;
        }

        log::debug!(
            "elink: req_flow_ctrl {:?}, req_line_speed {}, speed_cap_mask 0x{:x}",
            req_flow_ctrl,
            req_line_speed,
            speed_cap_mask
        );
    }
}

/// link_status_update - Rebuild `vars` from the persisted link status
///
/// Used by a function that shares the port but does not manage the link.
pub fn link_status_update(params: &mut Params, vars: &mut Vars, host: &mut dyn ElinkHost) {
    set_phy_vars(params, vars);

    vars.link_status = host.reg_read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS));
    vars.link_up = vars.link_status & LINK_STATUS_LINK_UP != 0;
    vars.phy_flags = PhyModeFlags::XGXS;

    if vars.link_up {
        log::debug!("elink: phy link up");

        vars.phy_link_up = true;
        vars.duplex = Duplex::Full;

        let (line_speed, duplex) = match vars.link_status & LINK_STATUS_SPEED_AND_DUPLEX_MASK {
            LINK_STATUS_SPEED_AND_DUPLEX_10THD => (SPEED_10, Duplex::Half),
            LINK_STATUS_SPEED_AND_DUPLEX_10TFD => (SPEED_10, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_100TXHD => (SPEED_100, Duplex::Half),
            LINK_STATUS_SPEED_AND_DUPLEX_100T4 | LINK_STATUS_SPEED_AND_DUPLEX_100TXFD => {
                (SPEED_100, Duplex::Full)
            }
            LINK_STATUS_SPEED_AND_DUPLEX_1000THD => (SPEED_1000, Duplex::Half),
            LINK_STATUS_SPEED_AND_DUPLEX_1000TFD => (SPEED_1000, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_2500THD => (SPEED_2500, Duplex::Half),
            LINK_STATUS_SPEED_AND_DUPLEX_2500TFD => (SPEED_2500, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_10GTFD => (SPEED_10000, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_12GTFD => (SPEED_12000, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_12_5GTFD => (SPEED_12500, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_13GTFD => (SPEED_13000, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_15GTFD => (SPEED_15000, Duplex::Full),
            LINK_STATUS_SPEED_AND_DUPLEX_16GTFD => (SPEED_16000, Duplex::Full),
            _ => (vars.line_speed, Duplex::Full),
        };
        vars.line_speed = line_speed;
        vars.duplex = duplex;

        vars.flow_ctrl = FlowCtrl::from_pause(
            vars.link_status & LINK_STATUS_TX_FLOW_CONTROL_ENABLED != 0,
            vars.link_status & LINK_STATUS_RX_FLOW_CONTROL_ENABLED != 0,
        );

        vars.phy_flags.set(
            PhyModeFlags::SGMII,
            vars.line_speed == SPEED_10 || vars.line_speed == SPEED_100,
        );

        vars.mac_type = if is_10g_speed(vars.line_speed) {
            MacType::Bmac
        } else {
            MacType::Emac
        };
    } else {
        log::debug!("elink: phy link down");

        vars.phy_link_up = false;
        vars.line_speed = 0;
        vars.duplex = Duplex::Full;
        vars.flow_ctrl = FlowCtrl::None;
        vars.mac_type = MacType::None;
    }

    let media_types = host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_MEDIA_TYPE));
    for idx in PhyIndex::ALL {
        let shift = PORT_HW_CFG_MEDIA_TYPE_PHY_SHIFT * idx.idx() as u32;
        params.phy_mut(idx).media_type =
            MediaType::from_raw((media_types >> shift) & PORT_HW_CFG_MEDIA_TYPE_PHY_MASK);
    }
    log::debug!("elink: media_types = 0x{:x}", media_types);

    vars.aeu_int_mask = host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_AEU_INT_MASK));

    log::debug!(
        "elink: link_status 0x{:x} phy_link_up {} int_mask 0x{:x}",
        vars.link_status,
        vars.phy_link_up,
        vars.aeu_int_mask
    );
    log::debug!(
        "elink: line_speed {} duplex {:?} flow_ctrl {:?}",
        vars.line_speed,
        vars.duplex,
        vars.flow_ctrl
    );
}

/******************************************************************/
/*                          Raw MDIO access                       */
/******************************************************************/

fn phy_by_addr(params: &Params, phy_addr: u8) -> Result<&Phy, ElinkDriverErr> {
    PhyIndex::ALL
        .into_iter()
        .take(params.num_phys as usize)
        .map(|idx| params.phy(idx))
        .find(|phy| phy.addr == phy_addr)
        .ok_or(ElinkDriverErr::PhyNotFound)
}

/// phy_read - Clause 45 read from the PHY answering at `phy_addr`
pub fn phy_read(
    params: &Params,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    host: &mut dyn ElinkHost,
) -> Result<u16, ElinkDriverErr> {
    let phy = phy_by_addr(params, phy_addr)?;
    cl45_read(host, phy, devad, reg)
}

/// phy_write - Clause 45 write to the PHY answering at `phy_addr`
pub fn phy_write(
    params: &Params,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    val: u16,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    let phy = phy_by_addr(params, phy_addr)?;
    cl45_write(host, phy, devad, reg, val)
}

/// get_ext_phy_fw_version - Render the external PHY firmware versions
///
/// Two external PHYs are reported as `first/second`.
pub fn get_ext_phy_fw_version(
    params: &Params,
    buf: &mut String,
    max_len: usize,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    buf.clear();

    let ext1 = params.phy(PhyIndex::External1);
    let spirom_ver = host.reg_read(ext1.ver_addr);
    let mut rc = Ok(());
    if let Some(ops) = get_operations(ext1.phy_type) {
        rc = ops.format_fw_version(spirom_ver, buf, max_len);
    }

    let ext2 = params.phy(PhyIndex::External2);
    if params.dual_media() && ext2.ver_addr != 0 {
        let spirom_ver = host.reg_read(ext2.ver_addr);
        if let Some(ops) = get_operations(ext2.phy_type) {
            buf.push('/');
            let remain = max_len.saturating_sub(buf.len());
            let mut second = String::new();
            let rc2 = ops.format_fw_version(spirom_ver, &mut second, remain);
            buf.push_str(&second);
            rc = rc.and(rc2);
        }
    }

    rc
}

/******************************************************************/
/*                              LEDs                              */
/******************************************************************/

/// set_led - Drive the port LEDs for `mode` at link speed `speed`
pub fn set_led(
    params: &Params,
    vars: &Vars,
    mode: LedMode,
    speed: u16,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    let port = params.port as u32;
    let emac_led = if params.port != 0 {
        GRCBASE_EMAC1 + EMAC_REG_EMAC_LED
    } else {
        GRCBASE_EMAC0 + EMAC_REG_EMAC_LED
    };

    log::debug!("elink: set_led port {} mode {:?}", port, mode);
    log::debug!(
        "elink: speed {} hw_led_mode 0x{:x}",
        speed,
        params.hw_led_mode
    );

    for idx in PhyIndex::EXTERNAL {
        let phy = params.phy(idx);
        if let Some(ops) = get_operations(phy.phy_type) {
            if let Err(e) = ops.set_link_led(phy, params, mode, host) {
                log::debug!("elink: {:?} LED update failed: {}", phy.phy_type, e);
            }
        }
    }

    if params.feature_config.emul_disable_emac {
        return Ok(());
    }

    match mode {
        LedMode::FrontPanelOff | LedMode::Off => {
            host.reg_write(NIG_REG_LED_10G_P0 + port * 4, 0);
            host.reg_write(NIG_REG_LED_MODE_P0 + port * 4, SHARED_HW_CFG_LED_MAC1);

            let tmp = host.reg_read(emac_led);
            host.reg_write(emac_led, tmp | EMAC_LED_OVERRIDE);
        }
        // OPER is ON while the link is up.
        LedMode::Oper if !vars.link_up => (),
        LedMode::Oper | LedMode::On => {
            let ext1 = params.phy(PhyIndex::External1);
            if ext1.phy_type == PhyType::Bcm8727 && params.chip_id.is_e2() && params.num_phys == 2 {
                // E2 with an 8727 drives the 10G LED straight from the NIG.
                if mode == LedMode::On || speed == SPEED_10000 {
                    host.reg_write(NIG_REG_LED_MODE_P0 + port * 4, 0);
                    host.reg_write(NIG_REG_LED_10G_P0 + port * 4, 1);

                    let tmp = host.reg_read(emac_led);
                    host.reg_write(emac_led, tmp | EMAC_LED_OVERRIDE);
                    return Ok(());
                }
            } else if params.single_media() {
                // Link up over CL73 does not light the LED in MAC mode.
                host.reg_write(NIG_REG_LED_MODE_P0 + port * 4, 0);
                host.reg_write(NIG_REG_LED_10G_P0 + port * 4, 1);
            } else {
                host.reg_write(NIG_REG_LED_MODE_P0 + port * 4, params.hw_led_mode as u32);
            }

            host.reg_write(NIG_REG_LED_CONTROL_OVERRIDE_TRAFFIC_P0 + port * 4, 0);
            // ~15.9Hz
            host.reg_write(NIG_REG_LED_CONTROL_BLINK_RATE_P0 + port * 4, LED_BLINK_RATE_VAL);
            host.reg_write(NIG_REG_LED_CONTROL_BLINK_RATE_ENA_P0 + port * 4, 1);

            let tmp = host.reg_read(emac_led);
            host.reg_write(emac_led, tmp & !EMAC_LED_OVERRIDE);

            // E1 uses a different traffic LED scheme below 10G.
            if params.chip_id.is_e1()
                && matches!(speed, SPEED_2500 | SPEED_1000 | SPEED_100 | SPEED_10)
            {
                host.reg_write(NIG_REG_LED_CONTROL_OVERRIDE_TRAFFIC_P0 + port * 4, 1);
                host.reg_write(NIG_REG_LED_CONTROL_TRAFFIC_P0 + port * 4, 0);
                host.reg_write(NIG_REG_LED_CONTROL_BLINK_TRAFFIC_P0 + port * 4, 1);
            }
        }
    }

    Ok(())
}

/// test_link - Check the link straight from the hardware
///
/// The internal PHY must be up, and on boards with external PHYs at least
/// one external PHY of the requested media class must be up too.
/// Returns `NoLink` when the hardware answers but reports no link.
pub fn test_link(
    params: &Params,
    is_serdes: bool,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    if params.chip_id.is_fpga() || params.chip_id.is_emul() {
        return Ok(());
    }

    let gp_status = cl22_read(
        host,
        params.phy(PhyIndex::Internal),
        MDIO_REG_BANK_GP_STATUS,
        MDIO_GP_STATUS_TOP_AN_STATUS1,
    )?;
    if gp_status & MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS == 0 {
        return Err(ElinkDriverErr::NoLink);
    }

    let mut ext_phy_link_up = false;
    match params.num_phys {
        1 => return Ok(()),
        2 => {
            let mut phy = *params.phy(PhyIndex::External1);
            let mut temp_vars = Vars::new();
            if let Some(ops) = get_operations(phy.phy_type) {
                ext_phy_link_up = ops.read_status(&mut phy, params, &mut temp_vars, host);
            }
        }
        3 => {
            for idx in PhyIndex::EXTERNAL {
                let mut phy = *params.phy(idx);
                if phy.media_type.is_serdes() != is_serdes {
                    continue;
                }

                let mut temp_vars = Vars::new();
                if let Some(ops) = get_operations(phy.phy_type) {
                    ext_phy_link_up |= ops.read_status(&mut phy, params, &mut temp_vars, host);
                }
            }
        }
        _ => (),
    }

    if ext_phy_link_up {
        Ok(())
    } else {
        Err(ElinkDriverErr::NoLink)
    }
}

/******************************************************************/
/*                    Link bring-up and update                    */
/******************************************************************/

fn link_initialize(
    host: &mut dyn ElinkHost,
    params: &mut Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    // With external PHYs this is overwritten by the speed they link up at.
    vars.line_speed = params.phy(PhyIndex::Internal).req_line_speed;

    if let Some(rc) = with_phy(params, PhyIndex::Internal, |ops, phy, params| {
        ops.config_init(phy, params, vars, host)
    }) {
        rc?;
    }

    let non_ext_phy = params.single_media() || params.loopback_mode == LoopbackMode::Xgxs;

    if non_ext_phy
        || params
            .phy(PhyIndex::External1)
            .flags
            .contains(PhyFlags::INIT_XGXS_FIRST)
        || params.loopback_mode == LoopbackMode::ExtPhy
    {
        let phy = *params.phy(PhyIndex::Internal);
        if vars.line_speed == SPEED_AUTO_NEG {
            set_parallel_detection(host, &phy)?;
        }
        init_internal_phy(host, &phy, params, vars)?;
    }

    if non_ext_phy {
        if params
            .phy(PhyIndex::Internal)
            .supported
            .contains(Supported::FIBRE)
        {
            vars.link_status |= LINK_STATUS_SERDES_LINK;
        }
    } else {
        for idx in ext_slots(params.num_phys) {
            if params.phy(idx).supported.contains(Supported::FIBRE) {
                vars.link_status |= LINK_STATUS_SERDES_LINK;
            }

            // The first PHY carries the second one, so it is always initialized.
            if idx == PhyIndex::External2
                && params.multi_phy_config.phy_selection() == PhySelection::FirstPhy
            {
                log::debug!("elink: ignoring second phy");
                continue;
            }

            let rc = with_phy(params, idx, |ops, phy, params| {
                ops.config_init(phy, params, vars, host)
            });
            if let Some(Err(e)) = rc {
                log::warn!(
                    "elink: port {} phy {:?} init failed: {}",
                    params.port,
                    idx,
                    e
                );
            }
        }
    }

    // Drop link indications raised while the PHYs were programmed.
    bits_dis(
        host,
        NIG_REG_STATUS_INTERRUPT_PORT0 + params.port as u32 * 4,
        NIG_STATUS_XGXS0_LINK10G
            | NIG_STATUS_XGXS0_LINK_STATUS
            | NIG_STATUS_SERDES0_LINK_STATUS
            | NIG_MASK_MI_INT,
    );
    update_mng(host, params, vars.link_status);

    Ok(())
}

fn update_link_down(
    host: &mut dyn ElinkHost,
    params: &Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    let port = params.port;
    log::debug!("elink: port {:x}: link is down", port);

    set_led(params, vars, LedMode::Off, 0, host)?;

    vars.mac_type = MacType::None;

    vars.link_status &= !(LINK_STATUS_SPEED_AND_DUPLEX_MASK
        | LINK_STATUS_LINK_UP
        | LINK_STATUS_AUTO_NEGOTIATE_COMPLETE
        | LINK_STATUS_RX_FLOW_CONTROL_FLAG_MASK
        | LINK_STATUS_TX_FLOW_CONTROL_FLAG_MASK
        | LINK_STATUS_PARALLEL_DETECTION_FLAG_MASK);
    vars.line_speed = 0;
    update_mng(host, params, vars.link_status);

    set_nig_drain(host, port, true);
    disable_emac(host, port);
    msleep(host, 10);

    bmac_rx_disable(host, params);
    reset_bmac(host, port);

    Ok(())
}

fn update_link_up(
    host: &mut dyn ElinkHost,
    params: &Params,
    vars: &mut Vars,
    link_10g: bool,
) -> Result<(), ElinkDriverErr> {
    vars.link_status |= LINK_STATUS_LINK_UP;
    if vars.flow_ctrl.tx() {
        vars.link_status |= LINK_STATUS_TX_FLOW_CONTROL_ENABLED;
    }
    if vars.flow_ctrl.rx() {
        vars.link_status |= LINK_STATUS_RX_FLOW_CONTROL_ENABLED;
    }

    let mut rc = Ok(());
    if link_10g {
        bmac_enable(host, params, vars, false);
        set_led(params, vars, LedMode::Oper, SPEED_10000, host)?;
    } else {
        rc = emac_program(host, params, vars);
        emac_enable(host, params, vars, false);

        if vars.link_status & LINK_STATUS_AUTO_NEGOTIATE_COMPLETE != 0
            && !vars.phy_flags.contains(PhyModeFlags::SGMII)
            && params.single_media()
        {
            set_gmii_tx_driver(host, params)?;
        }
    }

    if !params.chip_id.is_e2() {
        rc = rc.and(pbf_update(host, params, vars.flow_ctrl, vars.line_speed));
    }

    set_nig_drain(host, params.port, false);
    update_mng(host, params, vars.link_status);
    msleep(host, 20);

    rc
}

/// link_update - Reconcile the port link after a link interrupt
///
/// A direct board only needs the internal link. With one external PHY both
/// the internal and the external link must be up. With two external PHYs
/// the internal link and at least one external link must be up, and the
/// PHY selection decides which one carries traffic.
pub fn link_update(
    params: &mut Params,
    vars: &mut Vars,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    let port = params.port;
    let mut phy_vars = [Vars::new(); MAX_PHYS];
    let mut ext_phy_link_up = false;
    let mut active_external_phy: Option<PhyIndex> = None;

    log::debug!(
        "elink: port {:x}, XGXS? {}, int_status 0x{:x}",
        port,
        vars.phy_flags.contains(PhyModeFlags::XGXS),
        host.reg_read(NIG_REG_STATUS_INTERRUPT_PORT0 + port as u32 * 4)
    );
    log::debug!(
        "elink: int_mask 0x{:x} MI_INT {} SERDES_LINK {:x}",
        host.reg_read(NIG_REG_MASK_INTERRUPT_PORT0 + port as u32 * 4),
        host.reg_read(NIG_REG_EMAC0_STATUS_MISC_MI_INT + port as u32 * 0x18) > 0,
        host.reg_read(NIG_REG_SERDES0_STATUS_LINK_STATUS + port as u32 * 0x3c)
    );

    disable_emac(host, port);

    // External PHYs first, each into its own scratch vars.
    for idx in ext_slots(params.num_phys) {
        let slot_vars = &mut phy_vars[idx.idx()];
        let cur_link_up = with_phy(params, idx, |ops, phy, params| {
            ops.read_status(phy, params, slot_vars, host)
        })
        .unwrap_or(false);

        if !cur_link_up {
            log::debug!("elink: phy in index {:?} link is down", idx);
            continue;
        }
        log::debug!("elink: phy in index {:?} link is up", idx);

        if !ext_phy_link_up {
            ext_phy_link_up = true;
            active_external_phy = Some(idx);
            continue;
        }

        match params.multi_phy_config.phy_selection() {
            PhySelection::HardwareDefault | PhySelection::FirstPhyPriority => {
                active_external_phy = Some(PhyIndex::External1);
            }
            PhySelection::SecondPhyPriority => {
                active_external_phy = Some(PhyIndex::External2);
            }
            selection => {
                // Only one PHY can link up under this selection.
                log::warn!(
                    "elink: port {} invalid link indication with selection {:?}, disabling link",
                    port,
                    selection
                );
                ext_phy_link_up = false;
            }
        }
    }

    let prev_line_speed = vars.line_speed;

    // On a direct board this is the line side link, otherwise the link to
    // the first external PHY.
    with_phy(params, PhyIndex::Internal, |ops, phy, params| {
        ops.read_status(phy, params, vars, host)
    });

    let mut ext_phy_line_speed = 0;
    if let Some(active) = active_external_phy {
        let active_vars = &phy_vars[active.idx()];

        // Speed comes from the internal PHY, AN and pause from the external one.
        vars.flow_ctrl = active_vars.flow_ctrl;
        vars.link_status |= active_vars.link_status;

        if active == PhyIndex::External1 {
            let rc = with_phy(params, PhyIndex::External2, |ops, phy, params| {
                log::debug!("elink: disabling TX on EXT_PHY2");
                ops.phy_specific_func(phy, params, PhySpecificAction::DisableTx, host)
            });
            if let Some(Err(e)) = rc {
                log::debug!("elink: disabling TX on EXT_PHY2 failed: {}", e);
            }
        }

        ext_phy_line_speed = active_vars.line_speed;
        vars.duplex = active_vars.duplex;
        if params.phy(active).supported.contains(Supported::FIBRE) {
            vars.link_status |= LINK_STATUS_SERDES_LINK;
        } else {
            vars.link_status &= !LINK_STATUS_SERDES_LINK;
        }
        log::debug!("elink: active external phy selected: {:?}", active);
    }

    for idx in ext_slots(params.num_phys) {
        if params.phy(idx).flags.contains(PhyFlags::REARM_LATCH_SIGNAL) {
            rearm_latch_signal(host, port, active_external_phy == Some(idx));
            break;
        }
    }

    log::debug!(
        "elink: flow_ctrl {:?}, link_status 0x{:x}, ext_phy_line_speed {}",
        vars.flow_ctrl,
        vars.link_status,
        ext_phy_line_speed
    );

    if vars.phy_link_up {
        if !params.single_media() && ext_phy_link_up && ext_phy_line_speed != vars.line_speed {
            log::debug!(
                "elink: internal link speed {} is different than the external link speed {}",
                vars.line_speed,
                ext_phy_line_speed
            );
            vars.phy_link_up = false;
        } else if prev_line_speed != vars.line_speed {
            // A speed change without a link drop can glitch the NIG FIFO.
            set_nig_drain(host, port, false);
            msleep(host, 1);
        }
    }

    let link_10g = is_10g_speed(vars.line_speed);
    link_int_ack(host, params, vars, link_10g);

    // The external link can come up before the internal PHY was initialized.
    if !params.single_media() {
        let init_xgxs_first = params
            .phy(PhyIndex::External1)
            .flags
            .contains(PhyFlags::INIT_XGXS_FIRST);
        log::debug!(
            "elink: ext_phy_link_up {}, int_link_up {}, init_preceding {}",
            ext_phy_link_up,
            vars.phy_link_up,
            init_xgxs_first
        );

        if !init_xgxs_first && ext_phy_link_up && !vars.phy_link_up {
            vars.line_speed = ext_phy_line_speed;
            vars.phy_flags
                .set(PhyModeFlags::SGMII, vars.line_speed < SPEED_1000);

            let phy = *params.phy(PhyIndex::Internal);
            if let Err(e) = init_internal_phy(host, &phy, params, vars) {
                log::debug!("elink: internal phy init failed: {}", e);
            }
        }
    }

    let fault_detected = active_external_phy
        .map(|active| phy_vars[active.idx()].fault_detected)
        .unwrap_or(false);

    vars.link_up = vars.phy_link_up
        && (ext_phy_link_up || params.single_media())
        && !fault_detected;

    if vars.link_up {
        update_link_up(host, params, vars, link_10g)
    } else {
        update_link_down(host, params, vars)
    }
}

/// Bring a port up with the MAC and PHY fixed at `line_speed` for a loopback test.
fn phy_init_loopback(
    host: &mut dyn ElinkHost,
    params: &mut Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    let port = params.port;

    vars.link_up = true;
    vars.duplex = Duplex::Full;
    vars.flow_ctrl = FlowCtrl::None;

    match params.loopback_mode {
        LoopbackMode::Bmac => {
            vars.line_speed = SPEED_10000;
            vars.mac_type = MacType::Bmac;
            vars.phy_flags = PhyModeFlags::XGXS;

            xgxs_deassert(host, params);
            bmac_enable(host, params, vars, true);
            set_nig_drain(host, port, false);
        }
        LoopbackMode::Emac => {
            vars.line_speed = SPEED_1000;
            vars.mac_type = MacType::Emac;
            vars.phy_flags = PhyModeFlags::XGXS;

            xgxs_deassert(host, params);
            emac_enable(host, params, vars, true);
            emac_program(host, params, vars)?;
            set_nig_drain(host, port, false);
        }
        LoopbackMode::Xgxs | LoopbackMode::ExtPhy => {
            if params.req_line_speed[0] == SPEED_1000 {
                vars.line_speed = SPEED_1000;
                vars.mac_type = MacType::Emac;
            } else {
                vars.line_speed = SPEED_10000;
                vars.mac_type = MacType::Bmac;
            }

            xgxs_deassert(host, params);
            link_initialize(host, params, vars)?;

            if params.req_line_speed[0] == SPEED_1000 {
                emac_program(host, params, vars)?;
                emac_enable(host, params, vars, false);
            } else {
                bmac_enable(host, params, vars, false);
            }

            if params.loopback_mode == LoopbackMode::Xgxs {
                let phy = *params.phy(PhyIndex::Internal);
                if let Some(ops) = get_operations(phy.phy_type) {
                    ops.config_loopback(&phy, params, host)?;
                }
            } else {
                for idx in ext_slots(params.num_phys) {
                    let phy = *params.phy(idx);
                    if let Some(ops) = get_operations(phy.phy_type) {
                        ops.config_loopback(&phy, params, host)?;
                    }
                }
            }
            set_nig_drain(host, port, false);

            set_led(params, vars, LedMode::Oper, vars.line_speed, host)?;
        }
        mode => {
            log::debug!("elink: loopback mode {:?} is not supported", mode);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        }
    }

    Ok(())
}

/// Force the link up on FPGA and emulation platforms, which have no PHYs.
fn phy_init_platform(host: &mut dyn ElinkHost, params: &Params, vars: &mut Vars) {
    let chip_id = params.chip_id;

    vars.link_up = true;
    vars.duplex = Duplex::Full;
    vars.flow_ctrl = FlowCtrl::None;

    if chip_id.is_fpga() {
        vars.line_speed = SPEED_10000;
        vars.link_status = LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_10GTFD;
        if !chip_id.is_e1() {
            vars.flow_ctrl = FlowCtrl::Both;
            vars.link_status |=
                LINK_STATUS_TX_FLOW_CONTROL_ENABLED | LINK_STATUS_RX_FLOW_CONTROL_ENABLED;
        }
        emac_enable(host, params, vars, params.loopback_mode == LoopbackMode::Emac);
    } else if params.feature_config.emul_disable_bmac {
        vars.line_speed = SPEED_1000;
        vars.link_status = LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_1000TFD;
        emac_enable(host, params, vars, params.loopback_mode == LoopbackMode::Emac);
    } else {
        vars.line_speed = SPEED_10000;
        vars.link_status = LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_10GTFD;
        bmac_enable(host, params, vars, params.loopback_mode == LoopbackMode::Bmac);
    }

    if !chip_id.is_e2() {
        if let Err(e) = pbf_update(host, params, vars.flow_ctrl, vars.line_speed) {
            log::debug!("elink: PBF update failed: {}", e);
        }
    }

    set_nig_drain(host, params.port, false);
    update_mng(host, params, vars.link_status);
}

/// phy_init - Cold bring-up of the port link
///
/// `params.phy` must have been filled by `phy_probe`. Leaves the link
/// interrupts unmasked so that `link_update` runs on the next change.
pub fn phy_init(
    params: &mut Params,
    vars: &mut Vars,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    let port = params.port;

    log::debug!("elink: phy initialization started");
    log::debug!(
        "elink: (1) req_speed {}, req_flowctrl {:?}",
        params.req_line_speed[0],
        params.req_flow_ctrl[0]
    );
    log::debug!(
        "elink: (2) req_speed {}, req_flowctrl {:?}",
        params.req_line_speed[1],
        params.req_flow_ctrl[1]
    );

    vars.link_status = 0;
    vars.phy_link_up = false;
    vars.link_up = false;
    vars.line_speed = 0;
    vars.duplex = Duplex::Full;
    vars.flow_ctrl = FlowCtrl::None;
    vars.mac_type = MacType::None;
    vars.phy_flags = PhyModeFlags::empty();

    bits_dis(
        host,
        NIG_REG_MASK_INTERRUPT_PORT0 + port as u32 * 4,
        NIG_MASK_ALL_LINK,
    );

    if !params.feature_config.emul_disable_emac {
        emac_init(host, params);
    }

    if params.num_phys == 0 {
        log::error!("elink: no phy found for initialization");
        return Err(ElinkDriverErr::PhyNotFound);
    }
    set_phy_vars(params, vars);

    log::debug!("elink: num of phys on board: {}", params.num_phys);

    if params.chip_id.is_fpga() || params.chip_id.is_emul() {
        phy_init_platform(host, params, vars);
        return Ok(());
    }

    if params.loopback_mode != LoopbackMode::None {
        return phy_init_loopback(host, params, vars);
    }

    if params.switch_cfg == SwitchCfg::Switch10G {
        xgxs_deassert(host, params);
    } else {
        serdes_deassert(host, port);
    }

    let rc = link_initialize(host, params, vars);
    msleep(host, 30);
    link_int_enable(host, params);

    rc
}

/// link_reset - Take the port link down
///
/// With `reset_ext_phy` cleared the external PHYs keep running, which is
/// needed while their firmware is being upgraded.
pub fn link_reset(
    params: &Params,
    vars: &mut Vars,
    reset_ext_phy: bool,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    let port = params.port;
    log::debug!("elink: resetting the link of port {}", port);

    vars.link_status = 0;
    update_mng(host, params, vars.link_status);
    bits_dis(
        host,
        NIG_REG_MASK_INTERRUPT_PORT0 + port as u32 * 4,
        NIG_MASK_ALL_LINK,
    );

    set_nig_drain(host, port, true);

    // Egress off.
    host.reg_write(NIG_REG_BMAC0_OUT_EN + port as u32 * 4, 0);
    host.reg_write(NIG_REG_EGRESS_EMAC0_OUT_EN + port as u32 * 4, 0);

    if !params.feature_config.emul_disable_bmac {
        bmac_rx_disable(host, params);
    }
    disable_emac(host, port);

    msleep(host, 10);

    set_led(params, vars, LedMode::Off, 0, host)?;

    let mut clear_latch_ind = false;
    if reset_ext_phy {
        for idx in ext_slots(params.num_phys) {
            let phy = params.phy(idx);
            if let Some(ops) = get_operations(phy.phy_type) {
                if let Err(e) = ops.link_reset(phy, params, host) {
                    log::debug!("elink: {:?} link reset failed: {}", phy.phy_type, e);
                }
            }
            if phy.flags.contains(PhyFlags::REARM_LATCH_SIGNAL) {
                clear_latch_ind = true;
            }
        }
    }

    if clear_latch_ind {
        rearm_latch_signal(host, port, false);
        bits_dis(
            host,
            NIG_REG_LATCH_BC_0 + port as u32 * 4,
            1 << NIG_LATCH_BC_ENABLE_MI_INT,
        );
    }

    let int_phy = params.phy(PhyIndex::Internal);
    if let Some(ops) = get_operations(int_phy.phy_type) {
        ops.link_reset(int_phy, params, host)?;
    }

    reset_bmac(host, port);

    // Ingress off.
    host.reg_write(NIG_REG_BMAC0_IN_EN + port as u32 * 4, 0);
    host.reg_write(NIG_REG_EMAC0_IN_EN + port as u32 * 4, 0);
    host.reg_write(NIG_REG_BMAC0_OUT_EN + port as u32 * 4, 0);
    host.reg_write(NIG_REG_EGRESS_EMAC0_OUT_EN + port as u32 * 4, 0);

    vars.link_up = false;
    Ok(())
}

/// hw_reset_phy - Hold the external PHYs in hardware reset and forget them
pub fn hw_reset_phy(params: &mut Params, host: &mut dyn ElinkHost) {
    for idx in PhyIndex::EXTERNAL {
        let phy = *params.phy(idx);
        if let Some(ops) = get_operations(phy.phy_type) {
            ops.hw_reset(&phy, params, host);
            *params.phy_mut(idx) = Phy::null();
        }
    }
}

/******************************************************************/
/*                       Path wide PHY setup                      */
/******************************************************************/

/// Scratch port configuration used to populate a PHY of another port or path.
fn path_params(port: u8, shmem_base: u32, shmem2_base: u32, chip_id: ChipId) -> Params {
    let mut params = Params::new(port, shmem_base, shmem2_base);
    params.chip_id = chip_id;
    params
}

/// Shared memory and port of `port` when walking the two PHYs of a chip.
/// On E2 the same PHY serves port 0 of both paths.
fn port_of_path(
    port: u8,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    chip_id: ChipId,
) -> Params {
    if chip_id.is_e2() {
        path_params(
            0,
            shmem_base_path[port as usize],
            shmem2_base_path[port as usize],
            chip_id,
        )
    } else {
        path_params(port, shmem_base_path[0], shmem2_base_path[0], chip_id)
    }
}

/// Reset both PHYs of the chip and return them, indexed by port.
fn reset_phy_pair(
    host: &mut dyn ElinkHost,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    idx: PhyIndex,
    chip_id: ChipId,
    power_up: bool,
) -> Result<[Phy; PORT_MAX as usize], ElinkDriverErr> {
    let mut phy = [Phy::null(); PORT_MAX as usize];

    for port in (0..PORT_MAX).rev() {
        let mut params = port_of_path(port, shmem_base_path, shmem2_base_path, chip_id);
        phy[port as usize] = populate_phy(host, &mut params, idx).map_err(|e| {
            log::debug!("elink: populate phy failed");
            e
        })?;

        bits_dis(
            host,
            NIG_REG_MASK_INTERRUPT_PORT0 + params.port as u32 * 4,
            NIG_MASK_ALL_LINK,
        );

        // Registers are unreachable while the PHY is in low power mode.
        if power_up {
            host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, port);
        }

        cl45_write(host, &phy[port as usize], MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 1 << 15)?;
    }

    msleep(host, 150);

    // The PHY at the odd address boots second.
    if phy[0].addr & 0x1 != 0 {
        phy.swap(0, 1);
    }

    Ok(phy)
}

fn common_init_8073(
    host: &mut dyn ElinkHost,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    idx: PhyIndex,
    chip_id: ChipId,
) -> Result<(), ElinkDriverErr> {
    let swap_val = host.reg_read(NIG_REG_PORT_SWAP);
    let swap_override = host.reg_read(NIG_REG_STRAP_OVERRIDE);
    let port = (swap_val != 0 && swap_override != 0) as u8;
    ext_phy_hw_reset(host, port);

    let phy_blk = reset_phy_pair(host, shmem_base_path, shmem2_base_path, idx, chip_id, true)?;

    for port in (0..PORT_MAX).rev() {
        let port_of_path = if chip_id.is_e2() { 0 } else { port };
        let phy = &phy_blk[port as usize];

        log::debug!("elink: loading spirom for phy address 0x{:x}", phy.addr);
        external_rom_boot_8073_8727(host, phy, port_of_path)?;

        // Phase 1 of the TX power down toggle.
        cl45_bits_en(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_POWER_DOWN, 1 << 10)?;
    }

    msleep(host, 600);

    for port in (0..PORT_MAX).rev() {
        let phy = &phy_blk[port as usize];

        cl45_bits_dis(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_POWER_DOWN, 1 << 10)?;
        msleep(host, 15);

        // SPI-ROM version select.
        cl45_bits_en(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_EDC_FFE_MAIN, 1 << 12)?;

        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, port);
    }

    Ok(())
}

fn common_init_8726(
    host: &mut dyn ElinkHost,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    idx: PhyIndex,
    chip_id: ChipId,
) -> Result<(), ElinkDriverErr> {
    // Module detection interrupt on GPIO3 of both ports.
    let val = host.reg_read(MISC_REG_GPIO_EVENT_EN)
        | (1 << MISC_REGISTERS_GPIO_3)
        | (1 << (MISC_REGISTERS_GPIO_3 as u32 + MISC_REGISTERS_GPIO_PORT_SHIFT));
    host.reg_write(MISC_REG_GPIO_EVENT_EN, val);

    // GPIO1 resets the PHYs of both ports.
    ext_phy_hw_reset(host, 0);
    msleep(host, 5);

    for port in 0..PORT_MAX {
        let (shmem_base, shmem2_base) = if chip_id.is_e2() {
            (shmem_base_path[port as usize], shmem2_base_path[port as usize])
        } else {
            (shmem_base_path[0], shmem2_base_path[0])
        };

        let mut params = path_params(port, shmem_base, shmem2_base, chip_id);
        let phy = populate_phy(host, &mut params, idx).map_err(|e| {
            log::debug!("elink: populate phy failed");
            e
        })?;

        cl45_write(host, &phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL, 0x0001)?;

        // Fault module LED on until a module is qualified.
        host.gpio_write(MISC_REGISTERS_GPIO_0, GpioMode::OutputHigh, port);
    }

    Ok(())
}

/// GPIO and port of the external PHY reset line. Defaults to GPIO1 of port 1.
fn get_ext_phy_reset_gpio(host: &mut dyn ElinkHost, shmem_base: u32) -> (u8, u8) {
    let default_cfg = host.reg_read(shmem_base + SHMEM_PORT_HW_DEFAULT_CFG);

    match default_cfg & PORT_HW_CFG_EXT_PHY_GPIO_RST_MASK {
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO0_P0 => (MISC_REGISTERS_GPIO_0, 0),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO1_P0 => (MISC_REGISTERS_GPIO_1, 0),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO2_P0 => (MISC_REGISTERS_GPIO_2, 0),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO3_P0 => (MISC_REGISTERS_GPIO_3, 0),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO0_P1 => (MISC_REGISTERS_GPIO_0, 1),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO1_P1 => (MISC_REGISTERS_GPIO_1, 1),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO2_P1 => (MISC_REGISTERS_GPIO_2, 1),
        PORT_HW_CFG_EXT_PHY_GPIO_RST_GPIO3_P1 => (MISC_REGISTERS_GPIO_3, 1),
        _ => (MISC_REGISTERS_GPIO_1, 1),
    }
}

fn common_init_8727(
    host: &mut dyn ElinkHost,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    idx: PhyIndex,
    chip_id: ChipId,
) -> Result<(), ElinkDriverErr> {
    let swap_val = host.reg_read(NIG_REG_PORT_SWAP);
    let swap_override = host.reg_read(NIG_REG_STRAP_OVERRIDE);

    let (reset_gpio, port) = get_ext_phy_reset_gpio(host, shmem_base_path[0]);
    let port = port ^ (swap_val != 0 && swap_override != 0) as u8;

    host.gpio_write(reset_gpio, GpioMode::OutputLow, port);
    msleep(host, 1);
    host.gpio_write(reset_gpio, GpioMode::OutputHigh, port);
    msleep(host, 5);

    let phy_blk = reset_phy_pair(host, shmem_base_path, shmem2_base_path, idx, chip_id, false)?;

    for port in (0..PORT_MAX).rev() {
        let port_of_path = if chip_id.is_e2() { 0 } else { port };
        let phy = &phy_blk[port as usize];

        log::debug!("elink: loading spirom for phy address 0x{:x}", phy.addr);
        external_rom_boot_8073_8727(host, phy, port_of_path)?;
    }

    Ok(())
}

fn ext_phy_common_init(
    host: &mut dyn ElinkHost,
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    idx: PhyIndex,
    phy_type: PhyType,
    chip_id: ChipId,
) -> Result<(), ElinkDriverErr> {
    let rc = match phy_type {
        PhyType::Bcm8073 => common_init_8073(host, shmem_base_path, shmem2_base_path, idx, chip_id),
        PhyType::Bcm8727 => common_init_8727(host, shmem_base_path, shmem2_base_path, idx, chip_id),
        // GPIO1 affects both ports.
        PhyType::Bcm8726 => common_init_8726(host, shmem_base_path, shmem2_base_path, idx, chip_id),
        PhyType::Failure => Err(ElinkDriverErr::UnsupportedConfiguration),
        _ => {
            log::debug!("elink: ext_phy {:?} common init not required", phy_type);
            Ok(())
        }
    };

    if rc.is_err() {
        host.event_log(EventLog::PhyUninitialized { port: 0 });
    }

    rc
}

/// common_init_phy - Reset and boot the external PHYs shared by both ports
///
/// Runs once per chip, before any port is brought up. Skipped when the
/// firmware version of port 0 shows the PHYs were already booted.
pub fn common_init_phy(
    shmem_base_path: &[u32; 2],
    shmem2_base_path: &[u32; 2],
    chip_id: ChipId,
    host: &mut dyn ElinkHost,
) -> Result<(), ElinkDriverErr> {
    log::debug!("elink: begin common phy init");

    if chip_id.is_emul() {
        return Ok(());
    }

    let params = path_params(0, shmem_base_path[0], shmem2_base_path[0], chip_id);
    let phy_ver = host.reg_read(params.port_mb_addr(SHMEM_PORT_MB_EXT_PHY_FW_VERSION));
    if phy_ver != 0 {
        log::debug!("elink: not doing common init; phy ver is 0x{:x}", phy_ver);
        return Ok(());
    }

    let mut rc = Ok(());
    for idx in PhyIndex::EXTERNAL {
        let config_offset = if idx == PhyIndex::External1 {
            SHMEM_PORT_HW_EXT_PHY_CONFIG
        } else {
            SHMEM_PORT_HW_EXT_PHY_CONFIG2
        };
        let ext_phy_config = host.reg_read(params.port_hw_addr(config_offset));
        let (phy_type, _) = PhyType::from_ext_phy_config(ext_phy_config);

        let ret =
            ext_phy_common_init(host, shmem_base_path, shmem2_base_path, idx, phy_type, chip_id);
        rc = rc.and(ret);
    }

    rc
}

/// hw_lock_required - Whether any PHY of port 0 needs the MDIO hardware lock
pub fn hw_lock_required(
    shmem_base: u32,
    shmem2_base: u32,
    chip_id: ChipId,
    host: &mut dyn ElinkHost,
) -> bool {
    let mut params = path_params(0, shmem_base, shmem2_base, chip_id);

    for idx in PhyIndex::ALL {
        match populate_phy(host, &mut params, idx) {
            Ok(phy) if phy.flags.contains(PhyFlags::HW_LOCK_REQUIRED) => return true,
            Ok(_) => (),
            Err(_) => {
                log::debug!("elink: populate phy failed");
                return false;
            }
        }
    }

    false
}

/// fan_failure_det_req - Whether an external PHY of `port` needs fan failure detection
pub fn fan_failure_det_req(
    shmem_base: u32,
    shmem2_base: u32,
    port: u8,
    chip_id: ChipId,
    host: &mut dyn ElinkHost,
) -> bool {
    let mut params = path_params(port, shmem_base, shmem2_base, chip_id);
    let mut fan_failure_det_req = false;

    for idx in PhyIndex::EXTERNAL {
        match populate_phy(host, &mut params, idx) {
            Ok(phy) => {
                fan_failure_det_req |= phy.flags.contains(PhyFlags::FAN_FAILURE_DET_REQ);
            }
            Err(_) => {
                log::debug!("elink: populate phy failed");
                return false;
            }
        }
    }

    fan_failure_det_req
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::elink_test_host::MockHost;
    use alloc::vec;

    const INT_ADDR: u8 = 0x1;
    const EXT1_ADDR: u8 = 0x4;
    const EXT2_ADDR: u8 = 0x5;
    const SHMEM: u32 = 0x1000;

    fn gp_reg() -> u16 {
        MDIO_REG_BANK_GP_STATUS + (MDIO_GP_STATUS_TOP_AN_STATUS1 & 0xf)
    }

    fn int_link_up(host: &mut MockHost) {
        host.set_mdio_reg(
            INT_ADDR,
            DEFAULT_PHY_DEV_ADDR,
            gp_reg(),
            MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_DUPLEX_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_10G_KX4,
        );
    }

    fn ext_link_up(host: &mut MockHost, addr: u8) {
        host.set_mdio_reg(addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD, 1);
        host.set_mdio_reg(addr, MDIO_PMA_DEVAD, 0xc809, 1 << 9);
    }

    fn ext_8705(addr: u8, req_flow_ctrl: FlowCtrl) -> Phy {
        let mut phy = Phy::template(PhyType::Bcm8705);
        phy.addr = addr;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy.req_line_speed = SPEED_10000;
        phy.req_flow_ctrl = req_flow_ctrl;
        phy
    }

    /// Internal XGXS at address 1, forced to 10G, plus `ext` in the external slots.
    fn board(ext: &[Phy]) -> Params {
        let mut params = Params::new(0, SHMEM, 0);
        params.switch_cfg = SwitchCfg::Switch10G;
        params.req_line_speed[0] = SPEED_10000;
        params.req_flow_ctrl[0] = FlowCtrl::None;

        let int_phy = params.phy_mut(PhyIndex::Internal);
        *int_phy = Phy::template(PhyType::Xgxs);
        int_phy.addr = INT_ADDR;
        int_phy.def_md_devad = DEFAULT_PHY_DEV_ADDR;
        int_phy.mdio_ctrl = GRCBASE_EMAC0;
        int_phy.req_line_speed = SPEED_10000;
        int_phy.req_flow_ctrl = FlowCtrl::None;

        for (idx, phy) in PhyIndex::EXTERNAL.into_iter().zip(ext) {
            *params.phy_mut(idx) = *phy;
        }
        params.num_phys = 1 + ext.len() as u8;
        params
    }

    fn dual_board() -> Params {
        board(&[
            ext_8705(EXT1_ADDR, FlowCtrl::Both),
            ext_8705(EXT2_ADDR, FlowCtrl::Tx),
        ])
    }

    fn drain_writes(host: &MockHost) -> Vec<u32> {
        host.writes_to(NIG_REG_EGRESS_DRAIN0_MODE)
    }

    #[test]
    fn test_link_update_direct_10g() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();
        int_link_up(&mut host);

        assert_eq!(link_update(&mut params, &mut vars, &mut host), Ok(()));

        assert!(vars.link_up);
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.mac_type, MacType::Bmac);
        assert_eq!(
            host.read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS))
                & (LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_MASK),
            LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_10GTFD
        );
        assert_eq!(host.read(NIG_REG_EGRESS_DRAIN0_MODE), 0);
    }

    #[test]
    fn test_link_update_is_idempotent() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();
        int_link_up(&mut host);

        link_update(&mut params, &mut vars, &mut host).unwrap();
        // The speed change from 0 releases the drain once more.
        assert_eq!(drain_writes(&host), vec![0, 0]);
        let first = vars;

        host.clear_log();
        assert_eq!(link_update(&mut params, &mut vars, &mut host), Ok(()));
        assert_eq!(vars, first);
        assert_eq!(drain_writes(&host), vec![0]);
    }

    #[test]
    fn test_link_update_internal_down() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();

        assert_eq!(link_update(&mut params, &mut vars, &mut host), Ok(()));

        assert!(!vars.link_up);
        assert_eq!(vars.line_speed, 0);
        assert_eq!(vars.mac_type, MacType::None);
        assert_eq!(drain_writes(&host), vec![1]);
        assert_eq!(host.read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS)), 0);
    }

    #[test]
    fn test_link_update_first_phy_priority() {
        let mut host = MockHost::new();
        let mut params = dual_board();
        params.multi_phy_config.selection = PhySelection::FirstPhyPriority;
        let mut vars = Vars::new();
        int_link_up(&mut host);
        ext_link_up(&mut host, EXT1_ADDR);
        ext_link_up(&mut host, EXT2_ADDR);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.link_up);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Both);
        assert_ne!(vars.link_status & LINK_STATUS_SERDES_LINK, 0);
    }

    #[test]
    fn test_link_update_second_phy_priority() {
        let mut host = MockHost::new();
        let mut params = dual_board();
        params.multi_phy_config.selection = PhySelection::SecondPhyPriority;
        let mut vars = Vars::new();
        int_link_up(&mut host);
        ext_link_up(&mut host, EXT1_ADDR);
        ext_link_up(&mut host, EXT2_ADDR);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.link_up);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Tx);
    }

    #[test]
    fn test_link_update_only_second_phy_up() {
        let mut host = MockHost::new();
        let mut params = dual_board();
        let mut vars = Vars::new();
        int_link_up(&mut host);
        ext_link_up(&mut host, EXT2_ADDR);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.link_up);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Tx);
    }

    #[test]
    fn test_link_update_conflicting_selection() {
        let mut host = MockHost::new();
        let mut params = dual_board();
        params.multi_phy_config.selection = PhySelection::FirstPhy;
        let mut vars = Vars::new();
        int_link_up(&mut host);
        ext_link_up(&mut host, EXT1_ADDR);
        ext_link_up(&mut host, EXT2_ADDR);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(!vars.link_up);
        assert_eq!(host.read(NIG_REG_EGRESS_DRAIN0_MODE), 1);
    }

    #[test]
    fn test_link_update_external_down() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();
        int_link_up(&mut host);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.phy_link_up);
        assert!(!vars.link_up);
    }

    #[test]
    fn test_link_update_1g_leaves_led_alone() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();
        host.set_mdio_reg(
            INT_ADDR,
            DEFAULT_PHY_DEV_ADDR,
            gp_reg(),
            MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_DUPLEX_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G,
        );

        assert_eq!(link_update(&mut params, &mut vars, &mut host), Ok(()));

        assert!(vars.link_up);
        assert_eq!(vars.line_speed, SPEED_1000);
        assert_eq!(vars.mac_type, MacType::Emac);
        // Only the 10G path drives the link LED.
        assert!(host.writes_to(NIG_REG_LED_MODE_P0).is_empty());
        assert!(host.writes_to(NIG_REG_LED_10G_P0).is_empty());
        assert!(host.writes_to(GRCBASE_EMAC0 + EMAC_REG_EMAC_LED).is_empty());
    }

    #[test]
    fn test_link_update_stuck_mdio_reports_down() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();
        int_link_up(&mut host);
        ext_link_up(&mut host, EXT1_ADDR);
        host.mdio_stuck = true;

        assert_eq!(link_update(&mut params, &mut vars, &mut host), Ok(()));

        assert!(!vars.link_up);
        assert_eq!(vars.mac_type, MacType::None);
        assert!(host.events.contains(&EventLog::MdioAccessTimeout));
        assert_eq!(drain_writes(&host), vec![1]);
        assert_eq!(host.read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS)), 0);
        // Each access gives up after its bounded busy poll.
        assert!(host.elapsed_us < 100_000);
    }

    #[test]
    fn test_link_update_speed_mismatch() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();
        host.set_mdio_reg(
            INT_ADDR,
            DEFAULT_PHY_DEV_ADDR,
            gp_reg(),
            MDIO_GP_STATUS_TOP_AN_STATUS1_LINK_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_DUPLEX_STATUS
                | MDIO_GP_STATUS_TOP_AN_STATUS1_ACTUAL_SPEED_1G,
        );
        ext_link_up(&mut host, EXT1_ADDR);

        link_update(&mut params, &mut vars, &mut host).unwrap();

        assert!(!vars.link_up);
    }

    #[test]
    fn test_phy_init_without_phys() {
        let mut host = MockHost::new();
        let mut params = Params::new(0, SHMEM, 0);
        let mut vars = Vars::new();

        assert_eq!(
            phy_init(&mut params, &mut vars, &mut host),
            Err(ElinkDriverErr::PhyNotFound)
        );
    }

    #[test]
    fn test_phy_init_keeps_aeu_mask() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();
        vars.aeu_int_mask = 0x55;
        vars.line_speed = SPEED_1000;

        phy_init(&mut params, &mut vars, &mut host).unwrap();

        assert_eq!(vars.aeu_int_mask, 0x55);
        assert!(!vars.link_up);
        assert_ne!(
            host.read(NIG_REG_MASK_INTERRUPT_PORT0)
                & (NIG_MASK_XGXS0_LINK10G | NIG_MASK_XGXS0_LINK_STATUS),
            0
        );
    }

    #[test]
    fn test_phy_init_fpga() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        params.chip_id = ChipId(CHIP_REV_FPGA << CHIP_REV_SHIFT);
        let mut vars = Vars::new();

        phy_init(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.link_up);
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Both);
        assert_eq!(
            host.read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS)),
            LINK_STATUS_LINK_UP
                | LINK_STATUS_SPEED_AND_DUPLEX_10GTFD
                | LINK_STATUS_TX_FLOW_CONTROL_ENABLED
                | LINK_STATUS_RX_FLOW_CONTROL_ENABLED
        );
        assert_eq!(host.read(NIG_REG_EGRESS_DRAIN0_MODE), 0);
    }

    #[test]
    fn test_phy_init_bmac_loopback() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        params.loopback_mode = LoopbackMode::Bmac;
        let mut vars = Vars::new();

        phy_init(&mut params, &mut vars, &mut host).unwrap();

        assert!(vars.link_up);
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.mac_type, MacType::Bmac);
        assert_eq!(vars.phy_flags, PhyModeFlags::XGXS);
        assert_eq!(drain_writes(&host), vec![0]);
    }

    #[test]
    fn test_link_reset() {
        let mut host = MockHost::new();
        let params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();
        vars.link_up = true;
        vars.link_status = LINK_STATUS_LINK_UP;
        host.set(NIG_REG_BMAC0_IN_EN, 1);
        host.set(NIG_REG_EMAC0_IN_EN, 1);

        assert_eq!(link_reset(&params, &mut vars, true, &mut host), Ok(()));

        assert!(!vars.link_up);
        assert_eq!(vars.link_status, 0);
        assert_eq!(host.read(params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS)), 0);
        assert_eq!(drain_writes(&host), vec![1]);
        assert_eq!(host.read(NIG_REG_BMAC0_IN_EN), 0);
        assert_eq!(host.read(NIG_REG_EMAC0_IN_EN), 0);
        assert!(host
            .gpio
            .contains(&(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, 0)));
    }

    #[test]
    fn test_link_reset_keeps_external_phy() {
        let mut host = MockHost::new();
        let params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();

        link_reset(&params, &mut vars, false, &mut host).unwrap();

        assert!(host.gpio.is_empty());
    }

    #[test]
    fn test_set_led_off() {
        let mut host = MockHost::new();
        let params = board(&[]);
        let vars = Vars::new();

        set_led(&params, &vars, LedMode::Off, 0, &mut host).unwrap();

        assert_eq!(host.writes_to(NIG_REG_LED_10G_P0), vec![0]);
        assert_eq!(
            host.writes_to(NIG_REG_LED_MODE_P0),
            vec![SHARED_HW_CFG_LED_MAC1]
        );
        assert_ne!(
            host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_LED) & EMAC_LED_OVERRIDE,
            0
        );
    }

    #[test]
    fn test_set_led_oper_link_down() {
        let mut host = MockHost::new();
        let params = board(&[]);
        let vars = Vars::new();

        set_led(&params, &vars, LedMode::Oper, SPEED_10000, &mut host).unwrap();

        assert!(host.writes.is_empty());
    }

    #[test]
    fn test_set_led_on_e1_1g() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        params.chip_id = ChipId(CHIP_NUM_57710 << 16);
        let vars = Vars::new();
        host.set(GRCBASE_EMAC0 + EMAC_REG_EMAC_LED, EMAC_LED_OVERRIDE);

        set_led(&params, &vars, LedMode::On, SPEED_1000, &mut host).unwrap();

        assert_eq!(host.writes_to(NIG_REG_LED_MODE_P0), vec![0]);
        assert_eq!(host.writes_to(NIG_REG_LED_10G_P0), vec![1]);
        assert_eq!(
            host.writes_to(NIG_REG_LED_CONTROL_BLINK_RATE_P0),
            vec![LED_BLINK_RATE_VAL]
        );
        assert_eq!(
            host.writes_to(NIG_REG_LED_CONTROL_OVERRIDE_TRAFFIC_P0),
            vec![0, 1]
        );
        assert_eq!(host.read(GRCBASE_EMAC0 + EMAC_REG_EMAC_LED), 0);
    }

    #[test]
    fn test_set_led_dual_media_uses_hw_led_mode() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        params.hw_led_mode = 2;
        let mut vars = Vars::new();
        vars.link_up = true;

        set_led(&params, &vars, LedMode::Oper, SPEED_10000, &mut host).unwrap();

        assert_eq!(host.writes_to(NIG_REG_LED_MODE_P0), vec![2]);
        assert!(host.writes_to(NIG_REG_LED_10G_P0).is_empty());
    }

    #[test]
    fn test_test_link() {
        let mut host = MockHost::new();
        let params = board(&[]);
        assert_eq!(
            test_link(&params, false, &mut host),
            Err(ElinkDriverErr::NoLink)
        );

        int_link_up(&mut host);
        assert_eq!(test_link(&params, false, &mut host), Ok(()));
    }

    #[test]
    fn test_test_link_external() {
        let mut host = MockHost::new();
        let params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        int_link_up(&mut host);
        assert_eq!(
            test_link(&params, false, &mut host),
            Err(ElinkDriverErr::NoLink)
        );

        ext_link_up(&mut host, EXT1_ADDR);
        assert_eq!(test_link(&params, false, &mut host), Ok(()));
    }

    #[test]
    fn test_link_status_update_100t4() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        let mut vars = Vars::new();
        host.set(
            params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS),
            LINK_STATUS_LINK_UP
                | LINK_STATUS_SPEED_AND_DUPLEX_100T4
                | LINK_STATUS_TX_FLOW_CONTROL_ENABLED,
        );
        host.set(
            params.port_hw_addr(SHMEM_PORT_HW_MEDIA_TYPE),
            MediaType::SfpFiber.as_raw() << PORT_HW_CFG_MEDIA_TYPE_PHY_SHIFT,
        );
        host.set(params.port_hw_addr(SHMEM_PORT_HW_AEU_INT_MASK), 0xa5);

        link_status_update(&mut params, &mut vars, &mut host);

        assert!(vars.link_up);
        assert!(vars.phy_link_up);
        assert_eq!(vars.line_speed, SPEED_100);
        assert_eq!(vars.duplex, Duplex::Full);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Tx);
        assert_eq!(vars.mac_type, MacType::Emac);
        assert!(vars.phy_flags.contains(PhyModeFlags::SGMII));
        assert_eq!(params.phy(PhyIndex::External1).media_type, MediaType::SfpFiber);
        assert_eq!(vars.aeu_int_mask, 0xa5);
    }

    #[test]
    fn test_link_status_update_half_duplex_and_down() {
        let mut host = MockHost::new();
        let mut params = board(&[]);
        let mut vars = Vars::new();
        let status_addr = params.port_mb_addr(SHMEM_PORT_MB_LINK_STATUS);

        host.set(
            status_addr,
            LINK_STATUS_LINK_UP | LINK_STATUS_SPEED_AND_DUPLEX_1000THD,
        );
        link_status_update(&mut params, &mut vars, &mut host);
        assert_eq!(vars.line_speed, SPEED_1000);
        assert_eq!(vars.duplex, Duplex::Half);
        assert_eq!(vars.flow_ctrl, FlowCtrl::None);
        assert!(!vars.phy_flags.contains(PhyModeFlags::SGMII));

        host.set(status_addr, 0);
        link_status_update(&mut params, &mut vars, &mut host);
        assert!(!vars.link_up);
        assert_eq!(vars.line_speed, 0);
        assert_eq!(vars.mac_type, MacType::None);
    }

    #[test]
    fn test_phy_read_write() {
        let mut host = MockHost::new();
        let params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);
        host.set_mdio_reg(EXT1_ADDR, MDIO_PMA_DEVAD, 0xc809, 0x200);

        assert_eq!(
            phy_read(&params, EXT1_ADDR, MDIO_PMA_DEVAD, 0xc809, &mut host),
            Ok(0x200)
        );
        assert_eq!(
            phy_write(&params, EXT1_ADDR, MDIO_PMA_DEVAD, 0xca10, 0x1, &mut host),
            Ok(())
        );
        assert_eq!(host.mdio_reg(EXT1_ADDR, MDIO_PMA_DEVAD, 0xca10), 0x1);
        assert_eq!(
            phy_read(&params, 0x1f, MDIO_PMA_DEVAD, 0xc809, &mut host),
            Err(ElinkDriverErr::PhyNotFound)
        );
    }

    #[test]
    fn test_ext_phy_fw_version() {
        let mut host = MockHost::new();
        let mut ext1 = Phy::template(PhyType::Bcm8073);
        ext1.ver_addr = 0x700;
        let mut ext2 = Phy::template(PhyType::Bcm8727);
        ext2.ver_addr = 0x704;
        let params = board(&[ext1, ext2]);
        host.set(0x700, 0x0001_0002);
        host.set(0x704, 0x0003_0004);

        let mut buf = String::new();
        get_ext_phy_fw_version(&params, &mut buf, 20, &mut host).unwrap();
        assert_eq!(buf, "1.2/3.4");

        assert_eq!(
            get_ext_phy_fw_version(&params, &mut buf, 4, &mut host),
            Err(ElinkDriverErr::InvalidArgument)
        );
    }

    #[test]
    fn test_hw_reset_phy() {
        let mut host = MockHost::new();
        let mut params = board(&[ext_8705(EXT1_ADDR, FlowCtrl::Both)]);

        hw_reset_phy(&mut params, &mut host);

        assert_eq!(
            params.phy(PhyIndex::External1).phy_type,
            PhyType::NotConnected
        );
        assert_eq!(params.phy(PhyIndex::Internal).phy_type, PhyType::Xgxs);
    }

    fn set_ext_phy_config(host: &mut MockHost, port: u8, config: u32) {
        let params = Params::new(port, SHMEM, 0);
        host.set(params.port_hw_addr(SHMEM_PORT_HW_EXT_PHY_CONFIG), config);
    }

    #[test]
    fn test_hw_lock_and_fan_failure() {
        let mut host = MockHost::new();
        set_ext_phy_config(&mut host, 0, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073 | 0x2);
        assert!(hw_lock_required(SHMEM, 0, ChipId(0), &mut host));
        assert!(!fan_failure_det_req(SHMEM, 0, 0, ChipId(0), &mut host));

        set_ext_phy_config(&mut host, 0, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8705 | 0x2);
        assert!(!hw_lock_required(SHMEM, 0, ChipId(0), &mut host));

        set_ext_phy_config(&mut host, 1, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_SFX7101 | 0x3);
        assert!(fan_failure_det_req(SHMEM, 0, 1, ChipId(0), &mut host));
    }

    #[test]
    fn test_common_init_8073() {
        let mut host = MockHost::new();
        let shmem = [SHMEM, 0];
        let shmem2 = [0, 0];
        set_ext_phy_config(&mut host, 0, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073 | 0x2);
        set_ext_phy_config(&mut host, 1, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_BCM8073 | 0x3);
        for addr in [0x2, 0x3] {
            host.set_mdio_reg(addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER1, 0x0102);
            host.set_mdio_reg(addr, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG, 0x03);
        }

        assert_eq!(common_init_phy(&shmem, &shmem2, ChipId(0), &mut host), Ok(()));

        let gpio2: Vec<_> = host
            .gpio
            .iter()
            .filter(|(pin, _, _)| *pin == MISC_REGISTERS_GPIO_2)
            .copied()
            .collect();
        assert_eq!(
            gpio2,
            vec![
                (MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, 1),
                (MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, 0),
                (MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, 1),
                (MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, 0),
            ]
        );
        assert_eq!(
            host.mdio_reg(0x2, MDIO_PMA_DEVAD, MDIO_PMA_REG_EDC_FFE_MAIN) & (1 << 12),
            1 << 12
        );
        assert_eq!(
            host.mdio_reg(0x2, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_POWER_DOWN) & (1 << 10),
            0
        );

        let ver_addr = SHMEM + SHMEM_PORT_MB_EXT_PHY_FW_VERSION;
        assert_eq!(host.read(ver_addr), 0x0102_0000);

        // Already booted, nothing to do.
        host.clear_log();
        assert_eq!(common_init_phy(&shmem, &shmem2, ChipId(0), &mut host), Ok(()));
        assert!(host.gpio.is_empty());
        assert!(host.mdio_writes.is_empty());
    }

    #[test]
    fn test_common_init_failure_type() {
        let mut host = MockHost::new();
        set_ext_phy_config(&mut host, 0, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_FAILURE);

        assert_eq!(
            common_init_phy(&[SHMEM, 0], &[0, 0], ChipId(0), &mut host),
            Err(ElinkDriverErr::UnsupportedConfiguration)
        );
        assert_eq!(host.events, vec![EventLog::PhyUninitialized { port: 0 }]);
    }

    #[test]
    fn test_common_init_emulation_is_noop() {
        let mut host = MockHost::new();
        set_ext_phy_config(&mut host, 0, PORT_HW_CFG_XGXS_EXT_PHY_TYPE_FAILURE);

        let chip_id = ChipId(CHIP_REV_EMUL << CHIP_REV_SHIFT);
        assert_eq!(common_init_phy(&[SHMEM, 0], &[0, 0], chip_id, &mut host), Ok(()));
        assert!(host.events.is_empty());
    }
}
