use super::{
    elink_hw::{ElinkHost, GpioMode, Params, Phy, Vars, SPEED_10000},
    elink_operations::{
        cl45_read, cl45_write, ext_phy_hw_reset, ext_phy_resolve_fc, null_format_ver,
        common_ext_link_reset, save_spirom_version, wait_reset_complete, PhyOperations,
    },
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::{boxed::Box, string::String};

pub struct Bcm8705;

impl Bcm8705 {
    fn new() -> Self {
        Self
    }
}

pub fn get_self() -> Box<dyn PhyOperations> {
    let ops = Bcm8705::new();

    Box::new(ops)
}

impl PhyOperations for Bcm8705 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        _vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        log::debug!("elink: init 8705");

        // Restore normal power mode
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, params.port);

        ext_phy_hw_reset(host, params.port);

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0xa040)?;
        wait_reset_complete(host, phy, params)?;

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL, 0x8288)?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, 0x7fbf)?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CMU_PLL_BYPASS, 0x0100)?;
        cl45_write(host, phy, MDIO_WIS_DEVAD, MDIO_WIS_REG_LASI_CNTL, 0x1)?;

        // No microcode on this chip.
        save_spirom_version(host, params.port, 0, phy.ver_addr);

        Ok(())
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        // Latched, read twice.
        cl45_read(host, phy, MDIO_WIS_DEVAD, MDIO_WIS_REG_LASI_STATUS)?;
        let val1 = cl45_read(host, phy, MDIO_WIS_DEVAD, MDIO_WIS_REG_LASI_STATUS)?;
        log::debug!("elink: 8705 LASI status 0x{:x}", val1);

        let rx_sd = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD)?;

        cl45_read(host, phy, MDIO_PMA_DEVAD, 0xc809)?;
        let val1 = cl45_read(host, phy, MDIO_PMA_DEVAD, 0xc809)?;
        log::debug!("elink: 8705 1.c809 0x{:x}", val1);

        let link_up = rx_sd & 0x1 != 0 && val1 & (1 << 9) != 0 && val1 & (1 << 8) == 0;
        if link_up {
            vars.line_speed = SPEED_10000;
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

    fn format_fw_version(
        &self,
        raw_ver: u32,
        buf: &mut String,
        max_len: usize,
    ) -> Result<(), ElinkDriverErr> {
        null_format_ver(raw_ver, buf, max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{
        elink_hw::{FlowCtrl, PhyType},
        elink_test_host::MockHost,
    };

    const ADDR: u8 = 0x4;

    fn phy_8705() -> Phy {
        let mut phy = Phy::template(PhyType::Bcm8705);
        phy.addr = ADDR;
        phy.mdio_ctrl = GRCBASE_EMAC0;
        phy.ver_addr = 0x3000;
        phy.req_flow_ctrl = FlowCtrl::Both;
        phy
    }

    #[test]
    fn test_8705_config_init() {
        let mut host = MockHost::new();
        let mut phy = phy_8705();
        let params = Params::new(1, 0, 0);
        let mut vars = Vars::new();

        host.set(0x3000, 0xdead_beef);
        get_self()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert!(host.gpio.contains(&(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, 1)));
        assert_eq!(host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL), 0x8288);
        assert_eq!(host.mdio_reg(ADDR, MDIO_WIS_DEVAD, MDIO_WIS_REG_LASI_CNTL), 0x1);
        assert_eq!(host.read(0x3000), 0);
    }

    #[test]
    fn test_8705_read_status() {
        let mut host = MockHost::new();
        let mut phy = phy_8705();
        let params = Params::new(0, 0, 0);
        let mut vars = Vars::new();
        let ops = get_self();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_RX_SD, 0x1);
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, 0xc809, 1 << 9);
        assert!(ops.read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.flow_ctrl, FlowCtrl::Both);

        // Bit 8 flags a fault on the line side.
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, 0xc809, (1 << 9) | (1 << 8));
        let mut vars = Vars::new();
        assert!(!ops.read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, 0);
    }
}
