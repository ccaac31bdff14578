use super::{
    elink_hw::{msleep, Duplex, ElinkHost, GpioMode, LedMode, Params, Phy, Vars, SPEED_10000},
    elink_operations::{
        cl45_read, cl45_write, common_ext_link_reset, ext_phy_10g_an_resolve, ext_phy_hw_reset,
        ext_phy_resolve_fc, ext_phy_set_pause, save_spirom_version, wait_reset_complete,
        PhyOperations,
    },
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::{boxed::Box, string::String};

pub struct Sfx7101;

impl Sfx7101 {
    fn new() -> Self {
        Self
    }
}

pub fn get_self() -> Box<dyn PhyOperations> {
    let ops = Sfx7101::new();

    Box::new(ops)
}

impl PhyOperations for Sfx7101 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: setting the SFX7101 LASI indication");

        // Restore normal power mode
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, params.port);

        ext_phy_hw_reset(host, params.port);
        wait_reset_complete(host, phy, params)?;

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_CTRL, 0x1)?;

        // Blink on traffic.
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7107_LED_CNTL, 1 << 3)?;

        ext_phy_set_pause(host, phy, params, vars)?;

        // Restart autoneg
        let val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL)?;
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, val | 0x200)?;

        let fw_ver1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_VER1)? as u32;
        let fw_ver2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_VER2)? as u32;
        save_spirom_version(host, params.port, (fw_ver1 << 16) | fw_ver2, phy.ver_addr);

        Ok(())
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        let val2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LASI_STATUS)?;
        log::debug!("elink: 10G-base-T LASI status 0x{:x}->0x{:x}", val2, val1);

        let val2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS)?;
        log::debug!("elink: 10G-base-T PMA status 0x{:x}->0x{:x}", val2, val1);

        let link_up = val1 & 4 == 4;
        if link_up {
            let master = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_MASTER_STATUS)?;
            vars.line_speed = SPEED_10000;
            vars.duplex = Duplex::Full;
            log::debug!(
                "elink: SFX7101 AN status 0x{:x}, master={}",
                master,
                master & (1 << 14) != 0
            );

            ext_phy_10g_an_resolve(host, phy, vars)?;
            ext_phy_resolve_fc(host, phy, params, vars)?;
        }

        Ok(link_up)
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        common_ext_link_reset(params, host);
        Ok(())
    }

    fn config_loopback(
        &self,
        phy: &Phy,
        _params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        cl45_write(host, phy, MDIO_XS_DEVAD, MDIO_XS_SFX7101_XGXS_TEST1, 0x100)
    }

    /// format_fw_version - The four version bytes are ASCII, least significant first
    fn format_fw_version(
        &self,
        raw_ver: u32,
        buf: &mut String,
        max_len: usize,
    ) -> Result<(), ElinkDriverErr> {
        if max_len < 5 {
            return Err(ElinkDriverErr::InvalidArgument);
        }

        for b in raw_ver.to_le_bytes() {
            buf.push(b as char);
        }

        Ok(())
    }

    fn hw_reset(&self, _phy: &Phy, params: &Params, host: &mut dyn ElinkHost) {
        // Low power mode is GPIO2, reset is GPIO1.
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputLow, params.port);
        host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, params.port);
    }

    fn set_link_led(
        &self,
        phy: &Phy,
        _params: &Params,
        mode: LedMode,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        let val = match mode {
            LedMode::FrontPanelOff | LedMode::Off => 2,
            LedMode::On => 1,
            LedMode::Oper => 0,
        };

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7107_LINK_LED_CNTL, val)
    }
}

/// sfx7101_sp_sw_reset - Self clearing software reset of the SFX7101
///
/// Retried up to ten times, 50ms apart, until the reset bit reads back clear.
pub fn sfx7101_sp_sw_reset(phy: &Phy, host: &mut dyn ElinkHost) -> Result<(), ElinkDriverErr> {
    let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_RESET)?;

    for _ in 0..10 {
        msleep(host, 50);
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_RESET, val | (1 << 15))?;

        val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_RESET)?;
        if val & (1 << 15) == 0 {
            return Ok(());
        }
    }

    log::debug!("elink: SFX7101 software reset did not complete");
    Err(ElinkDriverErr::Timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{elink_hw::PhyType, elink_test_host::MockHost};

    const ADDR: u8 = 0x2;

    fn phy_7101() -> Phy {
        let mut phy = Phy::template(PhyType::Sfx7101);
        phy.addr = ADDR;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy
    }

    #[test]
    fn test_7101_read_status() {
        let mut host = MockHost::new();
        let mut phy = phy_7101();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_STATUS, 0x4);
        host.set_mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_STATUS, 0x21);

        assert!(get_self().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.duplex, Duplex::Full);
        assert_ne!(vars.link_status & LINK_STATUS_AUTO_NEGOTIATE_COMPLETE, 0);
        assert_eq!(vars.link_status & LINK_STATUS_PARALLEL_DETECTION_USED, 0);
    }

    #[test]
    fn test_7101_format_ver() {
        let ops = get_self();

        let mut s = String::new();
        ops.format_fw_version(0x3433_2e31, &mut s, 8).unwrap();
        assert_eq!(s, "1.34");

        let mut s = String::new();
        assert_eq!(
            ops.format_fw_version(0x3433_2e31, &mut s, 4),
            Err(ElinkDriverErr::InvalidArgument)
        );
    }

    #[test]
    fn test_7101_led() {
        let mut host = MockHost::new();
        let phy = phy_7101();
        let params = Params::new(0, 0, 0);
        let ops = get_self();

        for (mode, val) in [
            (LedMode::Off, 2),
            (LedMode::FrontPanelOff, 2),
            (LedMode::On, 1),
            (LedMode::Oper, 0),
        ] {
            ops.set_link_led(&phy, &params, mode, &mut host).unwrap();
            assert_eq!(
                host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_7107_LINK_LED_CNTL),
                val
            );
        }
    }

    #[test]
    fn test_7101_sw_reset_bounded() {
        let mut host = MockHost::new();
        let phy = phy_7101();

        // The reset register never clears its busy bit in the model.
        assert_eq!(
            sfx7101_sp_sw_reset(&phy, &mut host),
            Err(ElinkDriverErr::Timeout)
        );
        assert_eq!(
            host.mdio_writes_to(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_7101_RESET).len(),
            10
        );
    }
}
