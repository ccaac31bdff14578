use super::{
    elink_hw::{
        msleep, Duplex, ElinkHost, FlowCtrl, GpioMode, LoopbackMode, Params, Phy, PhyType, Vars,
        SPEED_10, SPEED_100, SPEED_1000, SPEED_10000, SPEED_2500, SPEED_AUTO_NEG,
    },
    elink_operations::{
        apply_pause_result, calc_ieee_aneg_adv, cl45_read, cl45_write, ext_phy_10g_an_resolve,
        ext_phy_resolve_fc, ext_phy_set_pause, save_bcm_spirom_ver, PhyOperations,
    },
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::boxed::Box;

pub struct Bcm8073;

impl Bcm8073 {
    fn new() -> Self {
        Self
    }
}

pub fn get_self() -> Box<dyn PhyOperations> {
    let ops = Bcm8073::new();

    Box::new(ops)
}

/// resolve_fc_8073 - Flow control of the 8073/8727 family
///
/// Falls back to the clause 37 pages when the clause 73 result is none.
pub fn resolve_fc_8073(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    if phy.req_line_speed == SPEED_10 || phy.req_line_speed == SPEED_100 {
        vars.flow_ctrl = phy.req_flow_ctrl;
        return Ok(());
    }

    if ext_phy_resolve_fc(host, phy, params, vars)? && vars.flow_ctrl == FlowCtrl::None {
        let ld_pause = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD)?;
        let lp_pause = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LP)?;

        let pause_result = ((ld_pause & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH) >> 5)
            | ((lp_pause & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH) >> 7);
        apply_pause_result(vars, pause_result as u32);

        log::debug!("elink: ext PHY CL37 pause result 0x{:x}", pause_result);
    }

    Ok(())
}

/// external_rom_boot_8073_8727 - Boot the microcontroller from the SPI ROM
///
/// Polls up to 300ms for the firmware to report a version.
/// The broadcast boot mode is always left disabled, even on timeout.
pub fn external_rom_boot_8073_8727(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    port: u8,
) -> Result<(), ElinkDriverErr> {
    // Boot port from external ROM
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL, 0x0001)?;

    // ucode reboot and rst
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL, 0x008c)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1, 0x0001)?;

    // Reset internal microprocessor
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_GEN_CTRL,
        MDIO_PMA_REG_GEN_CTRL_ROM_MICRO_RESET,
    )?;

    // Release srst bit
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_GEN_CTRL,
        MDIO_PMA_REG_GEN_CTRL_ROM_RESET_INTERNAL_MP,
    )?;

    msleep(host, 100);

    let booted = poll_fw_version(host, phy, port);

    // Clear ser_boot_ctl bit
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1, 0x0000)?;
    save_bcm_spirom_ver(host, phy, port)?;

    booted
}

fn poll_fw_version(host: &mut dyn ElinkHost, phy: &Phy, port: u8) -> Result<(), ElinkDriverErr> {
    let mut cnt = 0;
    loop {
        if cnt > 300 {
            log::error!("elink: port {} PHY 0x{:x} firmware download timed out", port, phy.addr);
            return Err(ElinkDriverErr::Timeout);
        }

        let fw_ver1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER1)?;
        let fw_msgout = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG)?;
        msleep(host, 1);
        cnt += 1;

        let waiting = fw_ver1 == 0
            || fw_ver1 == 0x4321
            || (fw_msgout & 0xff != 0x03 && phy.phy_type == PhyType::Bcm8073);
        if !waiting {
            return Ok(());
        }
    }
}

/// Revision A1 parts with firmware 1.02 need the SNR workaround.
fn is_snr_needed(host: &mut dyn ElinkHost, phy: &Phy) -> Result<bool, ElinkDriverErr> {
    let rev = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_CHIP_REV)?;
    if rev != 1 {
        return Ok(false);
    }

    let ver = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2)?;
    Ok(ver == 0x102)
}

/// xaui_wa - Wait for the XAUI workaround to finish on revision A0
fn xaui_wa(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    let rev = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_CHIP_REV)?;
    if rev > 0 {
        return Ok(());
    }

    for _ in 0..1000 {
        let val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS)?;

        // Bits 13 and 14 low mean the link is not up at 1G or 2.5G.
        if val & (1 << 14) == 0 || val & (1 << 13) == 0 {
            log::debug!("elink: XAUI work-around not required");
            return Ok(());
        } else if val & (1 << 15) == 0 {
            log::debug!("elink: bit 15 went off");

            for _ in 0..1000 {
                let wa = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_XAUI_WA)?;
                if wa & (1 << 15) != 0 {
                    log::debug!("elink: XAUI workaround has completed");
                    return Ok(());
                }
                msleep(host, 3);
            }
            break;
        }
        msleep(host, 3);
    }

    log::debug!("elink: warning: XAUI work-around timeout");
    Err(ElinkDriverErr::Timeout)
}

fn set_pause_cl37(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    let mut cl37_val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD)?;
    cl37_val &= !MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH;

    vars.ieee_fc = calc_ieee_aneg_adv(phy.req_flow_ctrl, params.req_fc_auto_adv);
    if vars.ieee_fc & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_SYMMETRIC
        == MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_SYMMETRIC
    {
        cl37_val |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_SYMMETRIC;
    }
    if vars.ieee_fc & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC
        == MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC
    {
        cl37_val |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_ASYMMETRIC;
    }
    if vars.ieee_fc & MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH
        == MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH
    {
        cl37_val |= MDIO_COMBO_IEEE0_AUTO_NEG_ADV_PAUSE_BOTH;
    }

    log::debug!("elink: ext phy CL37 AN advertize 0x{:x}", cl37_val);
    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD, cl37_val)?;
    msleep(host, 500);

    Ok(())
}

/// Force 10G with autoneg disabled, used for external loopback.
pub fn force_10g(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x2040)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2, 0x000b)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_BCM_CTRL, 0x0000)?;
    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x0000)
}

impl PhyOperations for Bcm8073 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: init 8073");

        let gpio_port = params.gpio_port(host);

        // Restore normal power mode
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, gpio_port);
        host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputHigh, gpio_port);

        // Enable LASI
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL, 1 << 2)?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x0004)?;

        set_pause_cl37(host, phy, params, vars)?;

        let msgout = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG)?;
        let rx_alarm = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;
        log::debug!("elink: before rom RX_ALARM(port{}): 0x{:x}", params.port, rx_alarm);
        log::debug!("elink: 8073 msgout 0x{:x}", msgout);

        // Swap polarity if required, only valid in 10G
        if params.lane_config & PORT_HW_CFG_SWAP_PHY_POLARITY_ENABLED != 0 {
            let val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_OPT_DIGITAL_CTRL)?;
            cl45_write(
                host,
                phy,
                MDIO_PMA_DEVAD,
                MDIO_PMA_REG_8073_OPT_DIGITAL_CTRL,
                val | (3 << 9),
            )?;
        }

        let default_cfg = host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_DEFAULT_CFG));
        if default_cfg & PORT_HW_CFG_ENABLE_BAM_ON_KR_ENABLED != 0 {
            let val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8073_BAM)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8073_BAM, val | 1)?;
            log::debug!("elink: enable CL37 BAM on KR");
        }

        if params.loopback_mode == LoopbackMode::Ext {
            force_10g(host, phy)?;
            log::debug!("elink: forced speed 10G on 807X");
            return Ok(());
        }
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_BCM_CTRL, 0x0002)?;

        let mut val = if phy.req_line_speed != SPEED_AUTO_NEG {
            if phy.req_line_speed == SPEED_10000 {
                1 << 7
            } else {
                1 << 5
            }
        } else {
            let mut adv = 0;
            if phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G != 0 {
                adv |= 1 << 7;
            }

            // 2.5G is advertised through the 1G page
            if phy.speed_cap_mask
                & (PORT_HW_CFG_SPEED_CAPABILITY_D0_1G | PORT_HW_CFG_SPEED_CAPABILITY_D0_2_5G)
                != 0
            {
                adv |= 1 << 5;
            }
            adv
        };
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV, val)?;
        log::debug!("elink: 807x autoneg val = 0x{:x}", val);

        let mut tmp1 = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8073_2_5G)?;
        let adv_2g5 = (phy.req_line_speed == SPEED_AUTO_NEG
            && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_2_5G != 0)
            || phy.req_line_speed == SPEED_2500;
        if adv_2g5 {
            // Allow 2.5G for A1 and above
            let rev = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_CHIP_REV)?;
            log::debug!("elink: add 2.5G");
            if rev > 0 {
                tmp1 |= 1;
            } else {
                tmp1 &= 0xfffe;
            }
        } else {
            log::debug!("elink: disable 2.5G");
            tmp1 &= 0xfffe;
        }
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8073_2_5G, tmp1)?;

        // Add support for CL37 (passive mode) II
        let tmp1 = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD)?;
        let duplex_bit = if phy.req_duplex == Duplex::Full { 0x20 } else { 0x40 };
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD, tmp1 | duplex_bit)?;

        // Add support for CL37 (passive mode) III
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN, 0x1000)?;

        // The SNR will improve about 2db by changing BW and FEE main tap.
        if is_snr_needed(host, phy)? {
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_EDC_FFE_MAIN, 0xfb0c)?;
        }

        // Add support for CL37 (passive mode) I
        val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV2)?;
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV2, val | (1 << 15))?;

        ext_phy_set_pause(host, phy, params, vars)?;

        // Restart autoneg
        msleep(host, 500);
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x1200)?;
        log::debug!(
            "elink: 807x autoneg restart: advertise 1G={:x}, 10G={:x}",
            (val & (1 << 5)) >> 5,
            (val & (1 << 7)) >> 7
        );

        Ok(())
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
        log::debug!("elink: 8703 LASI status 0x{:x}", val1);

        // Clear the interrupt LASI status register
        cl45_read(host, phy, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS)?;
        log::debug!("elink: 807x PCS status 0x{:x}", val1);

        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG)?;

        // Check the LASI
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;
        log::debug!("elink: KR 0x9003 0x{:x}", val1);

        // Check the link status
        cl45_read(host, phy, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS)?;
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        let link_up = val1 & 4 == 4;
        log::debug!("elink: PMA_REG_STATUS=0x{:x}", val1);

        if link_up && phy.req_line_speed != SPEED_10000 && xaui_wa(host, phy).is_err() {
            return Ok(false);
        }

        cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_LINK_STATUS)?;
        let an1000_status = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_LINK_STATUS)?;

        // Check the link status on 1.1.2
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        log::debug!(
            "elink: KR PMA status 0x{:x}, an_link_status-0x{:x}",
            val1,
            an1000_status
        );

        let link_up = val1 & 4 != 0 || an1000_status & (1 << 1) != 0;
        if link_up && is_snr_needed(host, phy)? {
            // The SNR will improve about 2dbby changing the BW and FEE main tap.
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PLL_BANDWIDTH, 0x26bc)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CDR_BANDWIDTH, 0x0333)?;
        }

        let link_status =
            cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS)?;

        // Bits 0..2 flag the speed, bits 13..15 are the matching active low status.
        let speed = if link_status & (1 << 2) != 0 && link_status & (1 << 15) == 0 {
            Some(SPEED_10000)
        } else if link_status & (1 << 1) != 0 && link_status & (1 << 14) == 0 {
            Some(SPEED_2500)
        } else if link_status & (1 << 0) != 0 && link_status & (1 << 13) == 0 {
            Some(SPEED_1000)
        } else {
            None
        };

        let Some(speed) = speed else {
            log::debug!("elink: port {}: external link is down", params.port);
            return Ok(false);
        };

        vars.line_speed = speed;
        log::debug!("elink: port {}: external link up in {}M", params.port, speed);

        // Swap polarity if required, must be undone in 1G
        if params.lane_config & PORT_HW_CFG_SWAP_PHY_POLARITY_ENABLED != 0 {
            let mut val = cl45_read(host, phy, MDIO_XS_DEVAD, MDIO_XS_REG_8073_RX_CTRL_PCIE)?;
            if speed == SPEED_1000 {
                val |= 1 << 3;
            } else {
                val &= !(1 << 3);
            }
            cl45_write(host, phy, MDIO_XS_DEVAD, MDIO_XS_REG_8073_RX_CTRL_PCIE, val)?;
        }

        ext_phy_10g_an_resolve(host, phy, vars)?;
        resolve_fc_8073(host, phy, params, vars)?;
        vars.duplex = Duplex::Full;

        Ok(true)
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        let gpio_port = params.gpio_port(host);
        log::debug!("elink: setting 8073 port {} into low power mode", gpio_port);
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, gpio_port);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::elink_test_host::MockHost;

    const ADDR: u8 = 0x5;

    fn phy_8073() -> Phy {
        let mut phy = Phy::template(PhyType::Bcm8073);
        phy.addr = ADDR;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy.speed_cap_mask =
            PORT_HW_CFG_SPEED_CAPABILITY_D0_10G | PORT_HW_CFG_SPEED_CAPABILITY_D0_1G;
        phy
    }

    #[test]
    fn test_8073_config_init_autoneg() {
        let mut host = MockHost::new();
        let mut phy = phy_8073();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8073_2_5G, 0x1);
        get_self()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert!(host.gpio.contains(&(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, 0)));
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_BCM_CTRL), 0x2);
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_ADV),
            (1 << 7) | (1 << 5)
        );
        // No 2.5G capability, so the advertisement bit is dropped.
        assert_eq!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8073_2_5G), 0);
        assert_eq!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN), 0x1000);
        assert_ne!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_ADV2) & (1 << 15), 0);
        assert_eq!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL), 0x1200);
    }

    #[test]
    fn test_8073_ext_loopback_forces_10g() {
        let mut host = MockHost::new();
        let mut phy = phy_8073();
        let mut params = Params::new(0, 0, 0);
        params.loopback_mode = LoopbackMode::Ext;
        let mut vars = Vars::new();

        get_self()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL), 0x2040);
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2), 0xb);
        assert!(host
            .mdio_writes_to(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL)
            .iter()
            .all(|v| *v == 0));
    }

    #[test]
    fn test_8073_read_status_2g5() {
        let mut host = MockHost::new();
        let mut phy = phy_8073();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS, 0x4);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_CHIP_REV, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS, 0x2);

        assert!(get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_2500);
        assert_eq!(vars.duplex, Duplex::Full);
    }

    #[test]
    fn test_8073_xaui_wa_timeout_is_link_down() {
        let mut host = MockHost::new();
        let mut phy = phy_8073();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS, 0x4);
        host.set_mdio_reg(
            ADDR,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_8073_SPEED_LINK_STATUS,
            (1 << 15) | (1 << 14) | (1 << 13),
        );

        assert!(!get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert!(host.elapsed_us >= 1000 * 3000);
        assert_eq!(vars.line_speed, 0);
    }

    #[test]
    fn test_8073_rom_boot_timeout() {
        let mut host = MockHost::new();
        let phy = phy_8073();

        assert_eq!(
            external_rom_boot_8073_8727(&mut host, &phy, 0),
            Err(ElinkDriverErr::Timeout)
        );
        assert_eq!(
            host.mdio_writes_to(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1),
            [1, 0]
        );
        // 100ms settle plus one 1ms poll per attempt.
        assert!(host.elapsed_us >= (100 + 301) * 1000);
        assert!(host.elapsed_us < 1_000_000);
    }
}
