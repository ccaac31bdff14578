use super::{
    elink_hw::{
        Duplex, ElinkHost, EventLog, GpioMode, LedMode, MediaType, Params, Phy, PhyFlags, Vars,
        SPEED_1000, SPEED_10000, SPEED_AUTO_NEG,
    },
    elink_operations::{
        cl45_read, cl45_write, ext_phy_resolve_fc, wait_reset_complete, PhyOperations,
        PhySpecificAction,
    },
    elink_regs::*,
    elink_sfp::{
        enforcement_policy, power_module_8727, sfp_mask_fault, sfp_module_detection,
        sfp_set_transmitter, wait_for_sfp_module_initialized,
    },
    ElinkDriverErr,
};
use alloc::boxed::Box;

pub struct Bcm8727;

impl Bcm8727 {
    fn new() -> Self {
        Self
    }
}

pub fn get_self() -> Box<dyn PhyOperations> {
    let ops = Bcm8727::new();

    Box::new(ops)
}

/// Module absent bit of the PHY identifier register, and the OPRXLOS polarity.
const MOD_ABS: u16 = 1 << 8;
const OPRXLOS: u16 = 1 << 9;

fn handle_mod_abs(
    host: &mut dyn ElinkHost,
    phy: &mut Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let noc = phy.flags.contains(PhyFlags::NOC);
    let mut mod_abs = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;

    let rx_alarm_status = if mod_abs & MOD_ABS != 0 {
        log::debug!("elink: MOD_ABS indication show module is absent");
        phy.media_type = MediaType::NotPresent;

        // Arm for the next insertion and keep EDC locked on the reference clock.
        mod_abs &= !MOD_ABS;
        if !noc {
            mod_abs &= !OPRXLOS;
        }
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, mod_abs)?;

        // RX alarm stays up until mod_abs changes.
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?
    } else {
        log::debug!("elink: MOD_ABS indication show module is present");

        // Arm for removal and restore the OPRXLOS polarity.
        mod_abs |= MOD_ABS;
        if !noc {
            mod_abs |= OPRXLOS;
        }
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, mod_abs)?;

        // Must be cleared before the module detection so it does not eat
        // the link update alarm.
        let rx_alarm_status = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;

        if enforcement_policy(host, params) == PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_DISABLE_TX_LASER {
            sfp_set_transmitter(host, phy, params, false)?;
        }

        if wait_for_sfp_module_initialized(host, phy).is_ok() {
            if let Err(e) = sfp_module_detection(host, phy, params) {
                log::debug!("elink: port {} module detection: {}", params.port, e);
            }
        } else {
            log::debug!("elink: SFP+ module is not initialized");
        }

        rx_alarm_status
    };

    log::debug!("elink: 8727 RX_ALARM_STATUS 0x{:x}", rx_alarm_status);
    Ok(())
}

/// Over-current on the module cage is reported on the 8727 GPIO0 input.
/// Returns true when the module power was found faulted.
fn check_over_current(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<bool, ElinkDriverErr> {
    let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL)?;
    if val1 & (1 << 8) != 0 {
        return Ok(false);
    }

    let oc_port = if params.chip_id.is_e1x() {
        params.port
    } else {
        host.path_id() + (params.port << 1)
    };
    log::warn!(
        "elink: power fault on port {}, SFP+ module power removed, remove the module and restart",
        oc_port
    );
    host.event_log(EventLog::OverCurrent { port: oc_port });

    // Disable all RX_ALARMs except for mod_abs
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL, 1 << 5)?;

    // Wait for module_absent_event
    let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_PHY_IDENTIFIER,
        val1 | MOD_ABS,
    )?;

    // Clear RX alarm
    cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;

    Ok(true)
}

impl PhyOperations for Bcm8727 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        _vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        let noc = phy.flags.contains(PhyFlags::NOC);

        wait_reset_complete(host, phy, params)?;

        log::debug!("elink: initializing BCM8727");

        // PMD link, MOD_ABS_FLT and 1G link alarm. LASI 0x6 enables XS on Tx.
        cl45_write(
            host,
            phy,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_RX_ALARM_CTRL,
            (1 << 2) | (1 << 5),
        )?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM_CTRL, 0)?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x0006)?;

        // Interrupt on module presence, with EDC off until a module shows up.
        let mut mod_abs = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
        mod_abs &= !MOD_ABS;
        if !noc {
            mod_abs &= !OPRXLOS;
        }
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, mod_abs)?;

        // Make MOD_ABS give interrupt on change
        let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL)?;
        val |= 1 << 12;
        if noc {
            val |= 3 << 5;
        } else {
            // GPIOs as inputs, GPIO0 reflects module over-current.
            val &= 0xff8f;
        }
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL, val)?;

        power_module_8727(host, phy, true)?;

        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG)?;
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;

        let cap_1g_only = phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_1G != 0
            && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G == 0;

        if phy.req_line_speed == SPEED_1000 {
            log::debug!("elink: setting 1G force");
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x40)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2, 0xd)?;

            // XAUI stays down until link in dual-media 1G.
            if params.dual_media() {
                let val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_GP)?;
                cl45_write(
                    host,
                    phy,
                    MDIO_PMA_DEVAD,
                    MDIO_PMA_REG_8727_PCS_GP,
                    val | (3 << 10),
                )?;
            }
        } else if phy.req_line_speed == SPEED_AUTO_NEG && cap_1g_only {
            log::debug!("elink: setting 1G clause37");
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8727_MISC_CTRL, 0)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN, 0x1300)?;
        } else {
            // Single reset pin, so the 10G defaults are written back explicitly.
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8727_MISC_CTRL, 0x0020)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN, 0x0100)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x2040)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2, 0x0008)?;
        }

        // Module EEPROM at 100kHz, some DACs fail at 400kHz.
        cl45_write(
            host,
            phy,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_8727_TWO_WIRE_SLAVE_ADDR,
            0xa001,
        )?;

        if params.feature_config.override_preemphasis {
            log::debug!(
                "elink: setting TX_CTRL1 0x{:x}, TX_CTRL2 0x{:x}",
                phy.tx_preemphasis[0],
                phy.tx_preemphasis[1]
            );
            cl45_write(
                host,
                phy,
                MDIO_PMA_DEVAD,
                MDIO_PMA_REG_8727_TX_CTRL1,
                phy.tx_preemphasis[0],
            )?;
            cl45_write(
                host,
                phy,
                MDIO_PMA_DEVAD,
                MDIO_PMA_REG_8727_TX_CTRL2,
                phy.tx_preemphasis[1],
            )?;
        }

        let tx_en_mode =
            host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SFP_CTRL)) & PORT_HW_CFG_TX_LASER_MASK;
        if tx_en_mode == PORT_HW_CFG_TX_LASER_GPIO0 {
            log::debug!("elink: enabling TXONOFF_PWRDN_DIS");
            let mut tmp2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_OPT_CFG_REG)?;
            tmp2 |= 0x1000;
            tmp2 &= 0xffef;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_OPT_CFG_REG, tmp2)?;
        }

        Ok(())
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        // If PHY is not initialized, do not check link status
        let lasi_ctrl = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL)?;
        if lasi_ctrl == 0 {
            return Ok(false);
        }

        // Check the LASI on Rx
        let rx_alarm_status = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;
        vars.line_speed = 0;
        log::debug!("elink: 8727 RX_ALARM_STATUS 0x{:x}", rx_alarm_status);

        sfp_mask_fault(host, phy, MDIO_PMA_REG_TX_ALARM, MDIO_PMA_REG_TX_ALARM_CTRL)?;

        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
        log::debug!("elink: 8727 LASI status 0x{:x}", val1);

        // Clear MSG-OUT
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_M8051_MSGOUT_REG)?;

        let module_event = rx_alarm_status & (1 << 5) != 0;
        if !phy.flags.contains(PhyFlags::NOC)
            && !module_event
            && check_over_current(host, phy, params)?
        {
            return Ok(false);
        }

        if module_event {
            handle_mod_abs(host, phy, params)?;

            // Enable all mod_abs and link detection bits
            cl45_write(
                host,
                phy,
                MDIO_PMA_DEVAD,
                MDIO_PMA_REG_RX_ALARM_CTRL,
                (1 << 5) | (1 << 2),
            )?;
        }

        log::debug!("elink: enabling 8727 TX laser if SFP is approved");
        self.phy_specific_func(phy, params, PhySpecificAction::EnableTx, host)?;

        // If transmitter is disabled, ignore false link up indication
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
        if val1 & (1 << 15) != 0 {
            log::debug!("elink: Tx is disabled");
            return Ok(false);
        }

        // Bits 0..2 report the speed, bits 13..15 report link down.
        let link_status = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS)?;
        let link_up = if link_status & (1 << 2) != 0 && link_status & (1 << 15) == 0 {
            vars.line_speed = SPEED_10000;
            log::debug!("elink: port {:x}: external link up in 10G", params.port);
            true
        } else if link_status & (1 << 0) != 0 && link_status & (1 << 13) == 0 {
            vars.line_speed = SPEED_1000;
            log::debug!("elink: port {:x}: external link up in 1G", params.port);
            true
        } else {
            log::debug!("elink: port {:x}: external link is down", params.port);
            false
        };

        // Capture 10G link fault.
        if vars.line_speed == SPEED_10000 {
            cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM)?;
            let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM)?;
            if val1 & (1 << 0) != 0 {
                vars.fault_detected = true;
            }
        }

        if link_up {
            ext_phy_resolve_fc(host, phy, params, vars)?;
            vars.duplex = Duplex::Full;
        }

        // 1G on a dual-media board powers the XAUI side only while up.
        if params.dual_media() && phy.req_line_speed == SPEED_1000 {
            let mut val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_GP)?;
            if link_up {
                val1 &= !(3 << 10);
            } else {
                val1 |= 3 << 10;
            }
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_GP, val1)?;
        }

        Ok(link_up)
    }

    fn link_reset(
        &self,
        phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        // Disable Transmitter
        sfp_set_transmitter(host, phy, params, false)?;

        // Clear LASI
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0)
    }

    fn hw_reset(&self, _phy: &Phy, _params: &Params, host: &mut dyn ElinkHost) {
        // Reset is on GPIO1. The port is faked so the strap swap cancels out.
        let swap_val = host.reg_read(NIG_REG_PORT_SWAP);
        let swap_override = host.reg_read(NIG_REG_STRAP_OVERRIDE);
        let port = (swap_val != 0 && swap_override != 0) as u8 ^ 1;

        host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, port);
    }

    fn set_link_led(
        &self,
        phy: &Phy,
        _params: &Params,
        mode: LedMode,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        // Only the NOC flavor drives the LEDs itself.
        if !phy.flags.contains(PhyFlags::NOC) {
            return Ok(());
        }

        let (led_mode_bitmask, gpio_pins_bitmask) = match mode {
            LedMode::FrontPanelOff | LedMode::Off => (0, 0x03),
            LedMode::On => (0, 0x02),
            LedMode::Oper => (0x60, 0x11),
        };

        let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL)?;
        val &= 0xff8f;
        val |= led_mode_bitmask;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL, val)?;

        let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL)?;
        val &= 0xffe0;
        val |= gpio_pins_bitmask;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL, val)
    }

    fn phy_specific_func(
        &self,
        phy: &Phy,
        params: &Params,
        action: PhySpecificAction,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        match action {
            PhySpecificAction::DisableTx => sfp_set_transmitter(host, phy, params, false),
            PhySpecificAction::EnableTx => {
                if phy.flags.contains(PhyFlags::SFP_NOT_APPROVED) {
                    Ok(())
                } else {
                    sfp_set_transmitter(host, phy, params, true)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{elink_hw::PhyType, elink_test_host::MockHost};

    const ADDR: u8 = 0x3;

    fn phy_8727() -> Phy {
        let mut phy = Phy::template(PhyType::Bcm8727);
        phy.addr = ADDR;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy
    }

    /// Initialized PHY with a healthy module cage.
    fn initialized(host: &mut MockHost) {
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x6);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL, 1 << 8);
    }

    #[test]
    fn test_8727_config_init_10g() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(0, 0x1000, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, 0x0300);

        get_self()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL), 0x6);
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER),
            0
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL),
            1 << 4
        );
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL), 0x2040);
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_TWO_WIRE_SLAVE_ADDR),
            0xa001
        );
    }

    #[test]
    fn test_8727_noc_keeps_oprxlos() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        phy.flags.insert(PhyFlags::NOC);
        let params = Params::new(0, 0x1000, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, 0x0300);

        get_self()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER),
            OPRXLOS
        );

        // No module power control on the NOC flavor.
        assert!(host
            .mdio_writes_to(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL)
            .is_empty());
    }

    #[test]
    fn test_8727_read_status_uninitialized() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        assert!(!get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert!(host.mdio_writes.is_empty());
    }

    #[test]
    fn test_8727_read_status_10g() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        initialized(&mut host);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS, 1 << 2);

        assert!(get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.duplex, Duplex::Full);
        assert!(!vars.fault_detected);
    }

    #[test]
    fn test_8727_read_status_1g_link_down_bit() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        initialized(&mut host);
        host.set_mdio_reg(
            ADDR,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_8073_SPEED_LINK_STATUS,
            (1 << 0) | (1 << 13),
        );

        assert!(!get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, 0);
    }

    #[test]
    fn test_8727_over_current() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(1, 0, 0);
        let mut vars = Vars::new();

        host.path_id = 1;
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x6);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8073_SPEED_LINK_STATUS, 1 << 2);

        assert!(!get_self().read_status(&mut phy, &params, &mut vars, &mut host));

        // Not an E1x chip, so the path is folded into the reported port.
        assert_eq!(host.events, [EventLog::OverCurrent { port: 3 }]);
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL),
            1 << 5
        );
        assert_ne!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER) & MOD_ABS,
            0
        );
    }

    #[test]
    fn test_8727_module_removed() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        phy.media_type = MediaType::SfpFiber;
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        initialized(&mut host);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM, 1 << 5);
        host.set_mdio_reg(
            ADDR,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_PHY_IDENTIFIER,
            MOD_ABS | OPRXLOS,
        );

        assert!(!get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(phy.media_type, MediaType::NotPresent);
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL),
            (1 << 5) | (1 << 2)
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER),
            0
        );
    }

    #[test]
    fn test_8727_unapproved_module_keeps_laser_off() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        phy.flags.insert(PhyFlags::SFP_NOT_APPROVED);
        let params = Params::new(0, 0, 0);
        let ops = get_self();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, 1 << 15);
        ops.phy_specific_func(&phy, &params, PhySpecificAction::EnableTx, &mut host)
            .unwrap();
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER),
            1 << 15
        );

        phy.flags.remove(PhyFlags::SFP_NOT_APPROVED);
        ops.phy_specific_func(&phy, &params, PhySpecificAction::EnableTx, &mut host)
            .unwrap();
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER),
            0
        );
    }

    #[test]
    fn test_8727_led_noc_only() {
        let mut host = MockHost::new();
        let mut phy = phy_8727();
        let params = Params::new(0, 0, 0);
        let ops = get_self();

        ops.set_link_led(&phy, &params, LedMode::Oper, &mut host)
            .unwrap();
        assert!(host.mdio_writes.is_empty());

        phy.flags.insert(PhyFlags::NOC);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL, 0x1070);
        ops.set_link_led(&phy, &params, LedMode::Oper, &mut host)
            .unwrap();
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_PCS_OPT_CTRL),
            0x1060
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL),
            0x11
        );
    }

    #[test]
    fn test_8727_hw_reset_cancels_swap() {
        let mut host = MockHost::new();
        let phy = phy_8727();
        let params = Params::new(0, 0, 0);
        let ops = get_self();

        ops.hw_reset(&phy, &params, &mut host);
        assert_eq!(host.gpio, [(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, 1)]);

        host.clear_log();
        host.set(NIG_REG_PORT_SWAP, 1);
        host.set(NIG_REG_STRAP_OVERRIDE, 1);
        ops.hw_reset(&phy, &params, &mut host);
        assert_eq!(host.gpio, [(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, 0)]);
    }
}
