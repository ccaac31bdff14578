use super::{
    elink_hw::{
        msleep, Duplex, ElinkHost, GpioMode, Params, Phy, Vars, SPEED_1000, SPEED_10000,
        SPEED_AUTO_NEG,
    },
    elink_operations::{
        cl45_read, cl45_write, ext_phy_hw_reset, ext_phy_resolve_fc, ext_phy_set_pause,
        save_bcm_spirom_ver, wait_reset_complete, PhyOperations,
    },
    elink_regs::*,
    elink_sfp::{sfp_mask_fault, sfp_module_detection},
    ElinkDriverErr,
};
use alloc::boxed::Box;

pub struct Bcm8706;

impl Bcm8706 {
    fn new() -> Self {
        Self
    }
}

pub struct Bcm8726;

impl Bcm8726 {
    fn new() -> Self {
        Self
    }
}

pub fn get_8706() -> Box<dyn PhyOperations> {
    let ops = Bcm8706::new();

    Box::new(ops)
}

pub fn get_8726() -> Box<dyn PhyOperations> {
    let ops = Bcm8726::new();

    Box::new(ops)
}

/// Link state shared by the 8706 and the 8726.
///
/// The link is up when both the PMD signal detect and the PCS block lock
/// are set, or when clause 37 autoneg reports 1G.
fn read_status_8706_8726(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<bool, ElinkDriverErr> {
    log::debug!("elink: XGXS 8706/8726");

    // Clear RX Alarm
    cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM)?;

    sfp_mask_fault(host, phy, MDIO_PMA_REG_TX_ALARM, MDIO_PMA_REG_TX_ALARM_CTRL)?;

    // Clear LASI indication
    let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
    let val2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
    log::debug!("elink: 8706/8726 LASI status 0x{:x}--> 0x{:x}", val1, val2);

    let rx_sd = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD)?;
    let pcs_status = cl45_read(host, phy, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS)?;
    cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_LINK_STATUS)?;
    let an_status = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_LINK_STATUS)?;
    log::debug!(
        "elink: 8706/8726 rx_sd 0x{:x} pcs_status 0x{:x} 1Gbps link_status 0x{:x}",
        rx_sd,
        pcs_status,
        an_status
    );

    let link_up = rx_sd & pcs_status & 0x1 != 0 || an_status & (1 << 1) != 0;
    if link_up {
        vars.line_speed = if an_status & (1 << 1) != 0 {
            SPEED_1000
        } else {
            SPEED_10000
        };
        ext_phy_resolve_fc(host, phy, params, vars)?;
        vars.duplex = Duplex::Full;
    }

    if vars.line_speed == SPEED_10000 {
        // Capture link fault. Read twice to clear stale value.
        cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM)?;
        if val1 & (1 << 0) != 0 {
            vars.fault_detected = true;
        }
    }

    Ok(link_up)
}

impl PhyOperations for Bcm8706 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        _vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, params.port);

        // HW reset
        ext_phy_hw_reset(host, params.port);
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0xa040)?;
        wait_reset_complete(host, phy, params)?;

        // Wait until fw is loaded
        let mut cnt = 0;
        while cnt < 100 {
            if cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER1)? != 0 {
                break;
            }
            msleep(host, 10);
            cnt += 1;
        }
        log::debug!("elink: XGXS 8706 is initialized after {} ms", cnt * 10);

        if params.feature_config.override_preemphasis {
            let step = MDIO_XS_8706_REG_BANK_RX1 - MDIO_XS_8706_REG_BANK_RX0;
            for (i, rx_preemphasis) in phy.rx_preemphasis.iter().enumerate() {
                let reg = MDIO_XS_8706_REG_BANK_RX0 + i as u16 * step;

                // The low 3 bits are the equalizer control.
                let mut val = cl45_read(host, phy, MDIO_XS_DEVAD, reg)?;
                val &= !0x7;
                val |= rx_preemphasis & 0x7;
                log::debug!(
                    "elink: setting RX Equalizer to BCM8706 reg 0x{:x} <-- val 0x{:x}",
                    reg,
                    val
                );
                cl45_write(host, phy, MDIO_XS_DEVAD, reg, val)?;
            }
        }

        if phy.req_line_speed == SPEED_10000 {
            log::debug!("elink: XGXS 8706 force 10Gbps");

            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_DIGITAL_CTRL, 0x400)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM_CTRL, 0)?;

            // Arm LASI for link and Tx fault.
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 3)?;
        } else {
            // Force 1Gbps using autoneg with 1G advertisement
            log::debug!("elink: XGXS 8706 AutoNeg");

            // Allow CL37 through CL73
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_CL73, 0x040c)?;

            // Full duplex advertisement and CL37 AN
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LP, 0x0020)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN, 0x1000)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV, 1 << 5)?;

            // Enable clause 73 AN
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x1200)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL, 0x0400)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x0004)?;
        }

        save_bcm_spirom_ver(host, phy, params.port)?;

        // A laser on GPIO0 must not put the PHY in low power when disabled.
        let tx_en_mode =
            host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SFP_CTRL)) & PORT_HW_CFG_TX_LASER_MASK;
        if tx_en_mode == PORT_HW_CFG_TX_LASER_GPIO0 {
            log::debug!("elink: enabling TXONOFF_PWRDN_DIS");
            let tmp1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_DIGITAL_CTRL)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_DIGITAL_CTRL, tmp1 | 0x1)?;
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
        read_status_8706_8726(host, phy, params, vars)
    }
}

fn external_rom_boot_8726(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    // Need to wait 100ms after reset
    msleep(host, 100);

    // Micro controller re-boot
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL, 0x018b)?;

    // Set soft reset
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_GEN_CTRL,
        MDIO_PMA_REG_GEN_CTRL_ROM_MICRO_RESET,
    )?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1, 0x0001)?;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_GEN_CTRL,
        MDIO_PMA_REG_GEN_CTRL_ROM_RESET_INTERNAL_MP,
    )?;

    // wait for 150ms for microcode load
    msleep(host, 150);

    // Disable serial boot control, tristates pins SS_N, SCK, MOSI, MISO
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1, 0x0000)?;

    msleep(host, 200);
    save_bcm_spirom_ver(host, phy, params.port)
}

impl PhyOperations for Bcm8726 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: initializing BCM8726");

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 1 << 15)?;
        wait_reset_complete(host, phy, params)?;

        external_rom_boot_8726(host, phy, params)?;

        // The reset above also reset the transmitter, so a module plugged
        // in before the driver loaded has to be detected again.
        if let Err(e) = sfp_module_detection(host, phy, params) {
            log::debug!("elink: port {} module detection: {}", params.port, e);
        }

        let cap_1g_only = phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_1G != 0
            && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G == 0;

        if phy.req_line_speed == SPEED_1000 {
            log::debug!("elink: setting 1G force");
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x40)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2, 0xd)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x5)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL, 0x400)?;
        } else if phy.req_line_speed == SPEED_AUTO_NEG && cap_1g_only {
            log::debug!("elink: setting 1G clause37");

            ext_phy_set_pause(host, phy, params, vars)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_ADV, 0x20)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_CL73, 0x040c)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_FC_LD, 0x0020)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CL37_AN, 0x1000)?;
            cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x1200)?;

            // RX alarm interrupts on 1G speed change
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x4)?;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_ALARM_CTRL, 0x400)?;
        } else {
            // Default 10G. Set only LASI control
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 1)?;
        }

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
                MDIO_PMA_REG_8726_TX_CTRL1,
                phy.tx_preemphasis[0],
            )?;
            cl45_write(
                host,
                phy,
                MDIO_PMA_DEVAD,
                MDIO_PMA_REG_8726_TX_CTRL2,
                phy.tx_preemphasis[1],
            )?;
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
        let link_up = read_status_8706_8726(host, phy, params, vars)?;
        if !link_up {
            return Ok(false);
        }

        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
        if val1 & (1 << 15) != 0 {
            log::debug!("elink: Tx is disabled");
            vars.line_speed = 0;
            return Ok(false);
        }

        Ok(true)
    }

    fn link_reset(
        &self,
        phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: 8726 link reset port {}", params.port);

        // Set serial boot control for external load
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL, 0x0001)
    }

    fn config_loopback(
        &self,
        phy: &Phy,
        _params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: PMA/PMD ext_phy_loopback: 8726");
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x0001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{
        elink_hw::{PhyIndex, PhyType},
        elink_test_host::MockHost,
    };

    const ADDR: u8 = 0x8;

    fn phy_87x6(phy_type: PhyType) -> Phy {
        let mut phy = Phy::template(phy_type);
        phy.addr = ADDR;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy
    }

    #[test]
    fn test_8706_read_status_10g_fault() {
        let mut host = MockHost::new();
        let mut phy = phy_87x6(PhyType::Bcm8706);
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM, 0x1);

        assert!(get_8706().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
        assert!(vars.fault_detected);

        // The fault event is masked while the alarm is pending.
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_TX_ALARM_CTRL) & 1,
            0
        );
    }

    #[test]
    fn test_8706_read_status_1g() {
        let mut host = MockHost::new();
        let mut phy = phy_87x6(PhyType::Bcm8706);
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_LINK_STATUS, 1 << 1);

        assert!(get_8706().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_1000);
        assert!(!vars.fault_detected);
    }

    #[test]
    fn test_8706_config_init_10g() {
        let mut host = MockHost::new();
        let mut phy = phy_87x6(PhyType::Bcm8706);
        phy.req_line_speed = SPEED_10000;
        let params = Params::new(0, 0x1000, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER1, 0x0102);
        host.set(
            params.port_hw_addr(SHMEM_PORT_HW_SFP_CTRL),
            PORT_HW_CFG_TX_LASER_GPIO0,
        );

        get_8706()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_DIGITAL_CTRL),
            0x401
        );
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL), 3);
    }

    #[test]
    fn test_8706_firmware_wait_bounded() {
        let mut host = MockHost::new();
        let mut phy = phy_87x6(PhyType::Bcm8706);
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        get_8706()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        // 100 polls 10ms apart, plus the reset pulse.
        assert!(host.elapsed_us >= 1_000_000);
        assert!(host.elapsed_us < 2_000_000);
        assert_eq!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_ADV), 1 << 5);
    }

    #[test]
    fn test_8726_tx_disabled_is_link_down() {
        let mut host = MockHost::new();
        let mut phy = phy_87x6(PhyType::Bcm8726);
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PCS_DEVAD, MDIO_PCS_REG_STATUS, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, 1 << 15);

        assert!(!get_8726().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, 0);
    }

    #[test]
    fn test_8726_config_init_forced_1g() {
        let mut host = MockHost::new();
        let mut params = Params::new(0, 0x1000, 0);
        let mut phy = phy_87x6(PhyType::Bcm8726);
        phy.req_line_speed = SPEED_1000;
        params.phy[PhyIndex::External1.idx()] = phy;
        params.num_phys = 2;
        let mut vars = Vars::new();

        // No module plugged, detection fails quietly.
        get_8726()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(
            host.mdio_writes_to(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL1),
            [1, 0]
        );
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL), 0x40);
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_10G_CTRL2), 0xd);
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL), 0x5);
    }

    #[test]
    fn test_8726_loopback_and_reset() {
        let mut host = MockHost::new();
        let phy = phy_87x6(PhyType::Bcm8726);
        let params = Params::new(0, 0, 0);
        let ops = get_8726();

        ops.config_loopback(&phy, &params, &mut host).unwrap();
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL), 0x1);

        ops.link_reset(&phy, &params, &mut host).unwrap();
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_GEN_CTRL), 0x1);
    }
}
