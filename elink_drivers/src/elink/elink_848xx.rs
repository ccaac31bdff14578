//! 10GBASE-T PHYs: BCM8481, BCM84823 and BCM84833.
//!
//! Link indication arrives through LED4 into the NIG latch rather than
//! through LASI, so these PHYs keep the latch enabled while configured.

use super::{
    elink_hw::{
        bits_en, msleep, Duplex, ElinkHost, GpioMode, LedMode, Params, Phy, PhyIndex,
        PhySelection, PhyType, Vars, SPEED_10, SPEED_100, SPEED_1000, SPEED_10000,
        SPEED_AUTO_NEG,
    },
    elink_internal::force_xgxs_10g,
    elink_operations::{
        cl45_read, cl45_write, ext_phy_10g_an_resolve, ext_phy_hw_reset, ext_phy_resolve_fc,
        ext_phy_set_pause, format_ver, save_spirom_version, wait_reset_complete, PhyOperations,
    },
    elink_regs::*,
    ElinkDriverErr,
};
use alloc::{boxed::Box, string::String};

pub struct Bcm8481;

impl Bcm8481 {
    fn new() -> Self {
        Self
    }
}

/// BCM84823 and BCM84833.
pub struct Bcm848x3;

impl Bcm848x3 {
    fn new() -> Self {
        Self
    }
}

pub fn get_8481() -> Box<dyn PhyOperations> {
    let ops = Bcm8481::new();

    Box::new(ops)
}

pub fn get_848x3() -> Box<dyn PhyOperations> {
    let ops = Bcm848x3::new();

    Box::new(ops)
}

/// The 84833 maps its PMA vendor registers one below the 8481/84823.
#[inline(always)]
fn adj(phy: &Phy, reg: u16) -> u16 {
    if phy.phy_type == PhyType::Bcm84833 {
        reg - 1
    } else {
        reg
    }
}

/// MDIO2ARM bridge used to reach the 32-bit registers of the PHY CPU.
const MDIO2ARM_CMD: u16 = 0xa817;
const MDIO2ARM_STATUS: u16 = 0xa818;
const MDIO2ARM_ADDR_LO: u16 = 0xa819;
const MDIO2ARM_ADDR_HI: u16 = 0xa81a;
const MDIO2ARM_DATA_LO: u16 = 0xa81b;
const MDIO2ARM_DATA_HI: u16 = 0xa81c;

fn mdio2arm_wait(host: &mut dyn ElinkHost, phy: &Phy) -> Result<bool, ElinkDriverErr> {
    for _ in 0..100 {
        let val = cl45_read(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_STATUS))?;
        if val & 1 != 0 {
            return Ok(true);
        }
        host.udelay(5);
    }

    Ok(false)
}

/// Read SPI_FW_STATUS of the PHY CPU and publish it as the firmware version.
/// Zero is published when the bridge does not answer.
fn save_848xx_spirom_version(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    // (1) SPI_BRIDGE_CTRL_2 (0xc200_0014) = 0x03000000
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_ADDR_LO), 0x0014)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_ADDR_HI), 0xc200)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_DATA_LO), 0x0000)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_DATA_HI), 0x0300)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_CMD), 0x0009)?;

    if !mdio2arm_wait(host, phy)? {
        log::debug!("elink: unable to read 848xx phy fw version(1)");
        save_spirom_version(host, params.port, 0, phy.ver_addr);
        return Ok(());
    }

    // (2) SPI_FW_STATUS (0xc200_0000)
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_ADDR_LO), 0x0000)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_ADDR_HI), 0xc200)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_CMD), 0x000a)?;

    if !mdio2arm_wait(host, phy)? {
        log::debug!("elink: unable to read 848xx phy fw version(2)");
        save_spirom_version(host, params.port, 0, phy.ver_addr);
        return Ok(());
    }

    let fw_ver1 = cl45_read(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_DATA_LO))? as u32;
    let fw_ver2 = cl45_read(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO2ARM_DATA_HI))? as u32;
    save_spirom_version(host, params.port, (fw_ver2 << 16) | fw_ver1, phy.ver_addr);

    Ok(())
}

fn set_led_848xx(host: &mut dyn ElinkHost, phy: &Phy) -> Result<(), ElinkDriverErr> {
    // PHYC_CTL_LED_CTL
    let mut val = cl45_read(
        host,
        phy,
        MDIO_PMA_DEVAD,
        adj(phy, MDIO_PMA_REG_8481_LINK_SIGNAL),
    )?;
    val &= 0xfe00;
    val |= 0x0092;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        adj(phy, MDIO_PMA_REG_8481_LINK_SIGNAL),
        val,
    )?;

    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO_PMA_REG_8481_LED1_MASK), 0x80)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO_PMA_REG_8481_LED2_MASK), 0x18)?;

    // Activity on LED3 follows both Tx and Rx.
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO_PMA_REG_8481_LED3_MASK), 0x0006)?;

    // Closest blink rate to the one used at 10/100/1000.
    cl45_write(host, phy, MDIO_PMA_DEVAD, adj(phy, MDIO_PMA_REG_8481_LED3_BLINK), 0)?;

    let val = cl45_read(
        host,
        phy,
        MDIO_PMA_DEVAD,
        adj(phy, MDIO_PMA_REG_84823_CTL_LED_CTL_1),
    )?;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        adj(phy, MDIO_PMA_REG_84823_CTL_LED_CTL_1),
        val | MDIO_PMA_REG_84823_LED3_STRETCH_EN,
    )?;

    // 'Interrupt Mask'
    cl45_write(host, phy, MDIO_AN_DEVAD, 0xfffb, 0xfffd)
}

/// Advertisement and autoneg restart shared by the whole family.
fn cmn_config_init(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<(), ElinkDriverErr> {
    bits_en(
        host,
        NIG_REG_LATCH_BC_0 + params.port as u32 * 4,
        1 << NIG_LATCH_BC_ENABLE_MI_INT,
    );

    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 0x0000)?;

    set_led_848xx(host, phy)?;

    let mut an_1000_val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_1000T_CTRL)?;

    ext_phy_set_pause(host, phy, params, vars)?;

    let mut an_10_100_val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_AN_ADV)?;
    let mut autoneg_val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_MII_CTRL)?;

    // Disable forced speed
    autoneg_val &= !((1 << 6) | (1 << 8) | (1 << 9) | (1 << 12) | (1 << 13));
    an_10_100_val &= !((1 << 5) | (1 << 6) | (1 << 7) | (1 << 8));

    let autoneg = phy.req_line_speed == SPEED_AUTO_NEG;
    let full = phy.req_duplex == Duplex::Full;

    if (autoneg && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_1G != 0)
        || phy.req_line_speed == SPEED_1000
    {
        an_1000_val |= 1 << 8;
        autoneg_val |= (1 << 9) | (1 << 12);
        if full {
            an_1000_val |= 1 << 9;
        }
        log::debug!("elink: advertising 1G");
    } else {
        an_1000_val &= !((1 << 8) | (1 << 9));
    }
    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_1000T_CTRL, an_1000_val)?;

    if autoneg
        && phy.speed_cap_mask
            & (PORT_HW_CFG_SPEED_CAPABILITY_D0_100M_FULL | PORT_HW_CFG_SPEED_CAPABILITY_D0_100M_HALF)
            != 0
    {
        an_10_100_val |= 1 << 7;

        // Autoneg restart for legacy speeds
        autoneg_val |= (1 << 9) | (1 << 12);
        if full {
            an_10_100_val |= 1 << 8;
        }
        log::debug!("elink: advertising 100M");
    }

    if autoneg
        && phy.speed_cap_mask
            & (PORT_HW_CFG_SPEED_CAPABILITY_D0_10M_FULL | PORT_HW_CFG_SPEED_CAPABILITY_D0_10M_HALF)
            != 0
    {
        an_10_100_val |= 1 << 5;
        autoneg_val |= (1 << 9) | (1 << 12);
        if full {
            an_10_100_val |= 1 << 6;
        }
        log::debug!("elink: advertising 10M");
    }

    // Only 10/100 can be forced. AUTO-MDIX stays on with autoneg off.
    if phy.req_line_speed == SPEED_100 {
        autoneg_val |= 1 << 13;
        cl45_write(
            host,
            phy,
            MDIO_AN_DEVAD,
            MDIO_AN_REG_8481_AUX_CTRL,
            (1 << 15) | (1 << 9) | 7,
        )?;
        log::debug!("elink: setting 100M force");
    }
    if phy.req_line_speed == SPEED_10 {
        cl45_write(
            host,
            phy,
            MDIO_AN_DEVAD,
            MDIO_AN_REG_8481_AUX_CTRL,
            (1 << 15) | (1 << 9) | 7,
        )?;
        log::debug!("elink: setting 10M force");
    }

    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_AN_ADV, an_10_100_val)?;

    if full {
        autoneg_val |= 1 << 8;
    }
    cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_MII_CTRL, autoneg_val)?;

    if (autoneg && phy.speed_cap_mask & PORT_HW_CFG_SPEED_CAPABILITY_D0_10G != 0)
        || phy.req_line_speed == SPEED_10000
    {
        log::debug!("elink: advertising 10G");
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x3200)?;
    } else if phy.req_line_speed != SPEED_10 && phy.req_line_speed != SPEED_100 {
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_10GBASE_T_AN_CTRL, 1)?;
    }

    save_848xx_spirom_version(host, phy, params)
}

fn read_status_848xx(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    vars: &mut Vars,
) -> Result<bool, ElinkDriverErr> {
    // Check PMD signal ok
    cl45_read(host, phy, MDIO_AN_DEVAD, 0xfffa)?;
    let val2 = cl45_read(
        host,
        phy,
        MDIO_PMA_DEVAD,
        adj(phy, MDIO_PMA_REG_8481_PMD_SIGNAL),
    )?;
    log::debug!("elink: BCM848xx: PMD_SIGNAL 1.a811 = 0x{:x}", val2);

    let link_up = if val2 & (1 << 11) != 0 {
        vars.line_speed = SPEED_10000;
        vars.duplex = Duplex::Full;
        ext_phy_10g_an_resolve(host, phy, vars)?;
        true
    } else {
        // Expansion register 0x42 holds the legacy operation mode status.
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_EXPANSION_REG_ACCESS, 0xf42)?;
        let legacy_status =
            cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_EXPANSION_REG_RD_RW)?;
        log::debug!("elink: legacy speed status = 0x{:x}", legacy_status);

        let link_up = legacy_status & (1 << 11) != 0;
        if link_up {
            vars.line_speed = match (legacy_status >> 9) & 0x3 {
                0 => SPEED_10,
                1 => SPEED_100,
                2 => SPEED_1000,
                _ => 0,
            };
            vars.duplex = if legacy_status & (1 << 8) != 0 {
                Duplex::Full
            } else {
                Duplex::Half
            };
            log::debug!(
                "elink: link is up in {}Mbps, is_duplex_full= {}",
                vars.line_speed,
                vars.duplex == Duplex::Full
            );

            let val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_MII_STATUS)?;
            if val & (1 << 5) != 0 {
                vars.link_status |= LINK_STATUS_AUTO_NEGOTIATE_COMPLETE;
            }
            let val = cl45_read(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_AN_EXPANSION)?;
            if val & (1 << 0) == 0 {
                vars.link_status |= LINK_STATUS_PARALLEL_DETECTION_USED;
            }
        }
        link_up
    };

    if link_up {
        log::debug!("elink: BCM848xx: link speed is {}", vars.line_speed);
        ext_phy_resolve_fc(host, phy, params, vars)?;
    }

    Ok(link_up)
}

/// Bits 11:7 of the raw version are the major number, 6:0 the minor.
fn format_ver_848xx(raw_ver: u32, buf: &mut String, max_len: usize) -> Result<(), ElinkDriverErr> {
    let spirom_ver = ((raw_ver & 0xf80) >> 7) << 16 | (raw_ver & 0x7f);
    format_ver(spirom_ver, buf, max_len)
}

fn set_link_led_848xx(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    mode: LedMode,
) -> Result<(), ElinkDriverErr> {
    let extphy1 =
        (params.hw_led_mode as u32) << SHARED_HW_CFG_LED_MODE_SHIFT == SHARED_HW_CFG_LED_EXTPHY1;
    log::debug!("elink: port 0x{:x}: LED mode {:?}", params.port, mode);

    let masks: [u16; 4] = match (mode, extphy1) {
        (LedMode::Off, true) => [0x0, 0x0, 0x0, 0x0],
        (LedMode::FrontPanelOff, true) => [0x0, 0x0, 0x0, 0x20],
        (LedMode::On, true) => {
            let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL)?;
            val &= 0x8000;
            val |= 0x2492;
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL, val)?;

            [0x0, 0x20, 0x20, 0x0]
        }
        (LedMode::Oper, true) => {
            let val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL)?;
            if (val & MDIO_PMA_REG_8481_LINK_SIGNAL_LED4_ENABLE_MASK)
                >> MDIO_PMA_REG_8481_LINK_SIGNAL_LED4_ENABLE_SHIFT
                == 0
            {
                log::debug!("elink: setting LINK_SIGNAL");
                cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL, 0xa492)?;
            }

            [0x10, 0x80, 0x98, 0x40]
        }
        (LedMode::Off | LedMode::FrontPanelOff, false) => {
            return cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED1_MASK, 0x0);
        }
        (LedMode::On, false) => {
            return cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED1_MASK, 0x20);
        }
        (LedMode::Oper, false) => {
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED1_MASK, 0x80)?;

            // Tell LED3 to blink on source, A83B[8:6] = 1
            let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL)?;
            val &= !(7 << 6);
            val |= 1 << 6;
            return cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL, val);
        }
    };

    for (reg, mask) in [
        MDIO_PMA_REG_8481_LED1_MASK,
        MDIO_PMA_REG_8481_LED2_MASK,
        MDIO_PMA_REG_8481_LED3_MASK,
        MDIO_PMA_REG_8481_LED5_MASK,
    ]
    .into_iter()
    .zip(masks)
    {
        cl45_write(host, phy, MDIO_PMA_DEVAD, reg, mask)?;
    }

    Ok(())
}

impl PhyOperations for Bcm8481 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        // Restore normal power mode
        host.gpio_write(MISC_REGISTERS_GPIO_2, GpioMode::OutputHigh, params.port);

        ext_phy_hw_reset(host, params.port);
        wait_reset_complete(host, phy, params)?;

        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 1 << 15)?;
        cmn_config_init(host, phy, params, vars)
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        read_status_848xx(host, phy, params, vars)
    }

    fn link_reset(
        &self,
        phy: &Phy,
        _params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        cl45_write(host, phy, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL, 0x0000)?;
        cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_CTRL, 1)
    }

    fn format_fw_version(
        &self,
        raw_ver: u32,
        buf: &mut String,
        max_len: usize,
    ) -> Result<(), ElinkDriverErr> {
        format_ver_848xx(raw_ver, buf, max_len)
    }

    fn hw_reset(&self, _phy: &Phy, _params: &Params, host: &mut dyn ElinkHost) {
        host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, 0);
        host.gpio_write(MISC_REGISTERS_GPIO_1, GpioMode::OutputLow, 1);
    }

    fn set_link_led(
        &self,
        phy: &Phy,
        params: &Params,
        mode: LedMode,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        set_link_led_848xx(host, phy, params, mode)
    }
}

impl PhyOperations for Bcm848x3 {
    fn config_init(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        // The media register moves up by three on the 84833.
        let media_reg = if phy.phy_type == PhyType::Bcm84833 {
            MDIO_CTL_REG_84823_MEDIA + 3
        } else {
            MDIO_CTL_REG_84823_MEDIA
        };

        msleep(host, 1);
        let gpio_port = params.gpio_port(host);
        host.gpio_write(MISC_REGISTERS_GPIO_3, GpioMode::OutputHigh, gpio_port);
        wait_reset_complete(host, phy, params)?;

        // Wait for GPHY to come out of reset
        msleep(host, 50);

        // The XGXS has to link up at 10G first.
        force_xgxs_10g(host, params, vars)?;

        let mut val = cl45_read(host, phy, MDIO_CTL_DEVAD, media_reg)?;
        val &= !(MDIO_CTL_REG_84823_MEDIA_MAC_MASK
            | MDIO_CTL_REG_84823_MEDIA_LINE_MASK
            | MDIO_CTL_REG_84823_MEDIA_COPPER_CORE_DOWN
            | MDIO_CTL_REG_84823_MEDIA_PRIORITY_MASK
            | MDIO_CTL_REG_84823_MEDIA_FIBER_1G);
        val |= MDIO_CTL_REG_84823_CTRL_MAC_XFI | MDIO_CTL_REG_84823_MEDIA_LINE_XAUI_L;

        let mut initialize = true;
        match params.multi_phy_config.phy_selection() {
            // Behaves like copper priority.
            PhySelection::HardwareDefault => (),
            PhySelection::FirstPhyPriority => val |= MDIO_CTL_REG_84823_MEDIA_PRIORITY_COPPER,
            PhySelection::SecondPhyPriority => val |= MDIO_CTL_REG_84823_MEDIA_PRIORITY_FIBER,
            // The first PHY is not initialized at all.
            PhySelection::FirstPhy => (),
            PhySelection::SecondPhy => {
                val |= MDIO_CTL_REG_84823_MEDIA_COPPER_CORE_DOWN;
                initialize = false;
            }
        }
        if params.phy(PhyIndex::External2).req_line_speed == SPEED_1000 {
            val |= MDIO_CTL_REG_84823_MEDIA_FIBER_1G;
        }

        cl45_write(host, phy, MDIO_CTL_DEVAD, media_reg, val)?;
        log::debug!(
            "elink: multi_phy config = {:?}, media control = 0x{:x}",
            params.multi_phy_config,
            val
        );

        if initialize {
            cmn_config_init(host, phy, params, vars)?;
        } else {
            save_848xx_spirom_version(host, phy, params)?;
        }

        let cms_enable =
            host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_DEFAULT_CFG)) & PORT_HW_CFG_ENABLE_CMS;

        let mut val = cl45_read(host, phy, MDIO_CTL_DEVAD, MDIO_CTL_REG_84823_USER_CTRL_REG)?;
        if cms_enable != 0 {
            val |= MDIO_CTL_REG_84823_USER_CTRL_CMS;
        } else {
            val &= !MDIO_CTL_REG_84823_USER_CTRL_CMS;
        }
        cl45_write(host, phy, MDIO_CTL_DEVAD, MDIO_CTL_REG_84823_USER_CTRL_REG, val)
    }

    fn link_status(
        &self,
        phy: &mut Phy,
        params: &Params,
        vars: &mut Vars,
        host: &mut dyn ElinkHost,
    ) -> Result<bool, ElinkDriverErr> {
        read_status_848xx(host, phy, params, vars)
    }

    fn link_reset(
        &self,
        _phy: &Phy,
        params: &Params,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        let gpio_port = params.gpio_port(host);
        host.gpio_write(MISC_REGISTERS_GPIO_3, GpioMode::OutputLow, gpio_port);
        Ok(())
    }

    fn format_fw_version(
        &self,
        raw_ver: u32,
        buf: &mut String,
        max_len: usize,
    ) -> Result<(), ElinkDriverErr> {
        format_ver_848xx(raw_ver, buf, max_len)
    }

    fn set_link_led(
        &self,
        phy: &Phy,
        params: &Params,
        mode: LedMode,
        host: &mut dyn ElinkHost,
    ) -> Result<(), ElinkDriverErr> {
        set_link_led_848xx(host, phy, params, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{elink_hw::MultiPhyConfig, elink_test_host::MockHost};

    const ADDR: u8 = 0x4;
    const INT_ADDR: u8 = 0x1;

    fn params_848xx(phy_type: PhyType) -> Params {
        let mut params = Params::new(0, 0x1000, 0);
        params.num_phys = 2;

        let int_phy = params.phy_mut(PhyIndex::Internal);
        *int_phy = Phy::template(PhyType::Xgxs);
        int_phy.addr = INT_ADDR;
        int_phy.def_md_devad = DEFAULT_PHY_DEV_ADDR;
        int_phy.mdio_ctrl = GRCBASE_EMAC0;

        let ext_phy = params.phy_mut(PhyIndex::External1);
        *ext_phy = Phy::template(phy_type);
        ext_phy.addr = ADDR;
        ext_phy.mdio_ctrl = GRCBASE_EMAC0;
        ext_phy.ver_addr = 0x2000;

        params
    }

    #[test]
    fn test_848xx_read_status_10g() {
        let mut host = MockHost::new();
        let params = params_848xx(PhyType::Bcm8481);
        let mut phy = *params.phy(PhyIndex::External1);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_PMD_SIGNAL, 1 << 11);

        assert!(get_8481().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
        assert_eq!(vars.duplex, Duplex::Full);
    }

    #[test]
    fn test_84833_read_status_adjusted() {
        let mut host = MockHost::new();
        let params = params_848xx(PhyType::Bcm84833);
        let mut phy = *params.phy(PhyIndex::External1);
        let mut vars = Vars::new();

        // The unadjusted register is ignored on the 84833.
        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_PMD_SIGNAL, 1 << 11);
        assert!(!get_848x3().read_status(&mut phy, &params, &mut vars, &mut host));

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_PMD_SIGNAL - 1, 1 << 11);
        assert!(get_848x3().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_10000);
    }

    #[test]
    fn test_848xx_read_status_legacy_100m_half() {
        let mut host = MockHost::new();
        let params = params_848xx(PhyType::Bcm84823);
        let mut phy = *params.phy(PhyIndex::External1);
        let mut vars = Vars::new();

        host.set_mdio_reg(
            ADDR,
            MDIO_AN_DEVAD,
            MDIO_AN_REG_8481_EXPANSION_REG_RD_RW,
            (1 << 11) | (1 << 9),
        );
        host.set_mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_MII_STATUS, 1 << 5);

        assert!(get_848x3().read_status(&mut phy, &params, &mut vars, &mut host));
        assert_eq!(vars.line_speed, SPEED_100);
        assert_eq!(vars.duplex, Duplex::Half);
        assert_ne!(vars.link_status & LINK_STATUS_AUTO_NEGOTIATE_COMPLETE, 0);
        assert_ne!(vars.link_status & LINK_STATUS_PARALLEL_DETECTION_USED, 0);
        assert_eq!(
            host.mdio_writes_to(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8481_EXPANSION_REG_ACCESS),
            [0xf42]
        );
    }

    #[test]
    fn test_8481_config_init_advertisement() {
        let mut host = MockHost::new();
        let mut params = params_848xx(PhyType::Bcm8481);
        {
            let phy = params.phy_mut(PhyIndex::External1);
            phy.speed_cap_mask = PORT_HW_CFG_SPEED_CAPABILITY_D0_1G
                | PORT_HW_CFG_SPEED_CAPABILITY_D0_10G
                | PORT_HW_CFG_SPEED_CAPABILITY_D0_100M_FULL;
        }
        let mut phy = *params.phy(PhyIndex::External1);
        let mut vars = Vars::new();

        host.set_mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO2ARM_STATUS, 1);

        get_8481()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(
            host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8481_1000T_CTRL),
            (1 << 8) | (1 << 9)
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_AN_ADV),
            (1 << 7) | (1 << 8)
        );
        assert_eq!(host.mdio_reg(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_CTRL), 0x3200);
        assert_ne!(host.read(NIG_REG_LATCH_BC_0) & 1, 0);

        // The bridge answers with the data words written in step one.
        assert_eq!(host.read(0x2000), 0x0300_0000);
    }

    #[test]
    fn test_848xx_spirom_timeout_saves_zero() {
        let mut host = MockHost::new();
        let params = params_848xx(PhyType::Bcm84833);
        let phy = *params.phy(PhyIndex::External1);

        host.set(0x2000, 0xdead);
        save_848xx_spirom_version(&mut host, &phy, &params).unwrap();
        assert_eq!(host.read(0x2000), 0);

        // Only the first bridge command is issued before giving up.
        assert_eq!(
            host.mdio_writes_to(ADDR, MDIO_PMA_DEVAD, adj(&phy, MDIO2ARM_CMD)),
            vec![0x0009]
        );

        // One clause-45 write costs 40 + 2 * (10 + 5) us, one read 40 + 15 + 10 us.
        let cl45_write_us = 70;
        let cl45_read_us = 65;
        let bridge_poll_us = 100 * (cl45_read_us + 5);
        assert_eq!(host.elapsed_us, 5 * cl45_write_us + bridge_poll_us);
    }

    #[test]
    fn test_848x3_second_phy_only() {
        let mut host = MockHost::new();
        let mut params = params_848xx(PhyType::Bcm84823);
        params.multi_phy_config = MultiPhyConfig {
            selection: PhySelection::SecondPhy,
            swapped: false,
        };
        params.phy_mut(PhyIndex::External2).req_line_speed = SPEED_1000;
        host.set(params.port_hw_addr(SHMEM_PORT_HW_DEFAULT_CFG), PORT_HW_CFG_ENABLE_CMS);
        let mut phy = *params.phy(PhyIndex::External1);
        let mut vars = Vars::new();

        get_848x3()
            .config_init(&mut phy, &params, &mut vars, &mut host)
            .unwrap();

        assert_eq!(
            host.mdio_reg(ADDR, MDIO_CTL_DEVAD, MDIO_CTL_REG_84823_MEDIA),
            MDIO_CTL_REG_84823_CTRL_MAC_XFI
                | MDIO_CTL_REG_84823_MEDIA_LINE_XAUI_L
                | MDIO_CTL_REG_84823_MEDIA_COPPER_CORE_DOWN
                | MDIO_CTL_REG_84823_MEDIA_FIBER_1G
        );

        // Copper core stays down, so no advertisement is programmed.
        assert!(host
            .mdio_writes_to(ADDR, MDIO_AN_DEVAD, MDIO_AN_REG_8481_LEGACY_MII_CTRL)
            .is_empty());
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_CTL_DEVAD, MDIO_CTL_REG_84823_USER_CTRL_REG),
            MDIO_CTL_REG_84823_USER_CTRL_CMS
        );
        assert_eq!(host.gpio[0], (MISC_REGISTERS_GPIO_3, GpioMode::OutputHigh, 0));
    }

    #[test]
    fn test_848xx_format_ver() {
        let mut s = String::new();
        get_848x3()
            .format_fw_version((0x3 << 7) | 0x12, &mut s, 16)
            .unwrap();
        assert_eq!(s, "3.12");
    }

    #[test]
    fn test_848xx_led_modes() {
        let mut host = MockHost::new();
        let mut params = params_848xx(PhyType::Bcm8481);
        let phy = *params.phy(PhyIndex::External1);
        let ops = get_8481();

        ops.set_link_led(&phy, &params, LedMode::On, &mut host)
            .unwrap();
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED1_MASK),
            0x20
        );

        params.hw_led_mode = (SHARED_HW_CFG_LED_EXTPHY1 >> SHARED_HW_CFG_LED_MODE_SHIFT) as u8;
        ops.set_link_led(&phy, &params, LedMode::Oper, &mut host)
            .unwrap();
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LINK_SIGNAL),
            0xa492
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED1_MASK),
            0x10
        );
        assert_eq!(
            host.mdio_reg(ADDR, MDIO_PMA_DEVAD, MDIO_PMA_REG_8481_LED5_MASK),
            0x40
        );
    }

    #[test]
    fn test_848x3_link_reset_gpio() {
        let mut host = MockHost::new();
        let mut params = params_848xx(PhyType::Bcm84833);
        params.port = 1;
        let phy = *params.phy(PhyIndex::External1);

        get_848x3().link_reset(&phy, &params, &mut host).unwrap();
        assert_eq!(host.gpio, [(MISC_REGISTERS_GPIO_3, GpioMode::OutputLow, 1)]);
    }
}
