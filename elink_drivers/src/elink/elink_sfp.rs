//! SFP+ cages behind the 8726/8727 two-wire bridges.
//!
//! Module EEPROM access, EDC mode selection, optional module verification
//! by the management firmware, and the TX laser and fault LED controls.

use super::{
    elink_hw::{
        msleep, ElinkHost, EventLog, GpioIntMode, GpioMode, MediaType, Params, Phy, PhyFlags,
        PhyIndex, PhyType, Vars,
    },
    elink_operations::{cl45_read, cl45_write},
    elink_regs::*,
    ElinkDriverErr,
};

const EEPROM_MAX_READ: usize = 16;

/// GPIO port of the SFP+ cage, honoring the port swap strap.
fn get_gpio_port(host: &mut dyn ElinkHost, params: &Params) -> u8 {
    let gpio_port = params.gpio_port(host);
    let swap_val = host.reg_read(NIG_REG_PORT_SWAP);
    let swap_override = host.reg_read(NIG_REG_STRAP_OVERRIDE);

    gpio_port ^ (swap_val != 0 && swap_override != 0) as u8
}

/// sfp_set_transmitter - Enable or disable the TX laser of the module
///
/// The laser is driven either through the PHY or through a board GPIO,
/// as selected by `sfp_ctrl` of the port.
pub fn sfp_set_transmitter(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    params: &Params,
    tx_en: bool,
) -> Result<(), ElinkDriverErr> {
    let tx_en_mode =
        host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SFP_CTRL)) & PORT_HW_CFG_TX_LASER_MASK;
    log::debug!(
        "elink: setting transmitter tx_en={} for port {} mode 0x{:x}",
        tx_en,
        params.port,
        tx_en_mode
    );

    match tx_en_mode {
        PORT_HW_CFG_TX_LASER_MDIO => {
            let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
            if tx_en {
                val &= !(1 << 15);
            } else {
                val |= 1 << 15;
            }
            cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER, val)?;
        }
        PORT_HW_CFG_TX_LASER_GPIO0..=PORT_HW_CFG_TX_LASER_GPIO3 => {
            let mode = if tx_en {
                GpioMode::OutputHigh
            } else {
                GpioMode::OutputLow
            };
            let pin = (tx_en_mode - PORT_HW_CFG_TX_LASER_GPIO0) as u8;
            let gpio_port = get_gpio_port(host, params);
            host.gpio_write(pin, mode, gpio_port);
        }
        _ => log::debug!("elink: invalid TX_LASER_MDIO 0x{:x}", tx_en_mode),
    }

    Ok(())
}

/// Wait for the two-wire bridge to reach `status`.
/// Returns the control register value that matched.
fn two_wire_wait(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    status: u16,
    delay_us: u32,
) -> Result<u16, ElinkDriverErr> {
    for _ in 0..100 {
        let val = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_CTRL)?;
        if val & MDIO_PMA_REG_SFP_TWO_WIRE_CTRL_STATUS_MASK == status {
            return Ok(val);
        }
        host.udelay(delay_us);
    }

    Err(ElinkDriverErr::Timeout)
}

fn read_eeprom_8726(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    addr: u16,
    buf: &mut [u8],
) -> Result<(), ElinkDriverErr> {
    let byte_cnt = buf.len() as u16;

    // Set the read command byte count and address
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_SFP_TWO_WIRE_BYTE_CNT,
        byte_cnt | 0xa000,
    )?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_MEM_ADDR, addr)?;

    // Activate read command
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_CTRL, 0x2c0f)?;

    // Wait up to 500us for command complete status
    if two_wire_wait(host, phy, MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_COMPLETE, 5).is_err() {
        log::debug!("elink: got bad status when reading from SFP+ EEPROM");
        return Err(ElinkDriverErr::Timeout);
    }

    for (i, b) in buf.iter_mut().enumerate() {
        let val = cl45_read(
            host,
            phy,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_8726_TWO_WIRE_DATA_BUF + i as u16,
        )?;
        *b = (val & MDIO_PMA_REG_8726_TWO_WIRE_DATA_MASK) as u8;
    }

    two_wire_wait(host, phy, MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_IDLE, 1000).map(|_| ())
}

fn read_eeprom_8727(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    addr: u16,
    buf: &mut [u8],
) -> Result<(), ElinkDriverErr> {
    // Need to read from 1.8000 to clear it
    cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_CTRL)?;

    // The bridge reads at least two bytes.
    let byte_cnt = buf.len().max(2) as u16;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_BYTE_CNT, byte_cnt)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_MEM_ADDR, addr)?;

    // Set the destination address
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        0x8004,
        MDIO_PMA_REG_8727_TWO_WIRE_DATA_BUF,
    )?;

    // Activate read command
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_SFP_TWO_WIRE_CTRL, 0x8002)?;

    // The two-wire command needs a while before the status is valid.
    msleep(host, 1);

    if two_wire_wait(host, phy, MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_COMPLETE, 5).is_err() {
        log::debug!("elink: got bad status when reading from SFP+ EEPROM");
        return Err(ElinkDriverErr::Timeout);
    }

    for (i, b) in buf.iter_mut().enumerate() {
        let val = cl45_read(
            host,
            phy,
            MDIO_PMA_DEVAD,
            MDIO_PMA_REG_8727_TWO_WIRE_DATA_BUF + i as u16,
        )?;
        *b = (val & MDIO_PMA_REG_8727_TWO_WIRE_DATA_MASK) as u8;
    }

    two_wire_wait(host, phy, MDIO_PMA_REG_SFP_TWO_WIRE_STATUS_IDLE, 1000).map(|_| ())
}

/// read_sfp_module_eeprom - Read up to 16 bytes of the module EEPROM
///
/// Only PHYs with a two-wire bridge (8726, 8727) can reach the module.
pub fn read_sfp_module_eeprom(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    addr: u16,
    buf: &mut [u8],
) -> Result<(), ElinkDriverErr> {
    if buf.len() > EEPROM_MAX_READ {
        log::debug!("elink: reading from eeprom is limited to 0xf");
        return Err(ElinkDriverErr::InvalidArgument);
    }

    match phy.phy_type {
        PhyType::Bcm8726 => read_eeprom_8726(host, phy, addr, buf),
        PhyType::Bcm8727 => read_eeprom_8727(host, phy, addr, buf),
        _ => Err(ElinkDriverErr::UnsupportedConfiguration),
    }
}

/// get_edc_mode - Classify the plugged module and pick its EDC mode
///
/// Also records the detected media type, both in `phy` and in the
/// shared memory word read by functions that do not manage the link.
pub fn get_edc_mode(
    host: &mut dyn ElinkHost,
    phy: &mut Phy,
    params: &Params,
) -> Result<u16, ElinkDriverErr> {
    let mut edc_mode = EDC_MODE_LIMITING;
    let mut check_limiting_mode = false;
    phy.media_type = MediaType::Unspecified;

    let mut val = [0u8; 1];
    if let Err(e) = read_sfp_module_eeprom(host, phy, SFP_EEPROM_CON_TYPE_ADDR, &mut val) {
        log::debug!("elink: failed to read from SFP+ module EEPROM");
        return Err(e);
    }

    match val[0] {
        SFP_EEPROM_CON_TYPE_VAL_COPPER => {
            phy.media_type = MediaType::DaTwinax;

            // Active cables carry their own SFP+ module.
            let mut copper_module_type = [0u8; 1];
            read_sfp_module_eeprom(
                host,
                phy,
                SFP_EEPROM_FC_TX_TECH_ADDR,
                &mut copper_module_type,
            )?;

            if copper_module_type[0] & SFP_EEPROM_FC_TX_TECH_BITMASK_COPPER_ACTIVE != 0 {
                log::debug!("elink: active copper cable detected");
                check_limiting_mode = true;
            } else if copper_module_type[0] & SFP_EEPROM_FC_TX_TECH_BITMASK_COPPER_PASSIVE != 0 {
                log::debug!("elink: passive copper cable detected");
                edc_mode = EDC_MODE_PASSIVE_DAC;
            } else {
                log::debug!(
                    "elink: unknown copper-cable-type 0x{:x}",
                    copper_module_type[0]
                );
                return Err(ElinkDriverErr::UnsupportedConfiguration);
            }
        }
        SFP_EEPROM_CON_TYPE_VAL_LC => {
            phy.media_type = MediaType::SfpFiber;
            log::debug!("elink: optic module detected");
            check_limiting_mode = true;
        }
        con_type => {
            log::debug!("elink: unable to determine module type 0x{:x}", con_type);
            return Err(ElinkDriverErr::UnsupportedConfiguration);
        }
    }

    // Update media type for non-PMF sync
    let sync_offset = params.port_hw_addr(SHMEM_PORT_HW_MEDIA_TYPE);
    let mut media_types = host.reg_read(sync_offset);
    if let Some(idx) = params.phy_index_of(phy) {
        let shift = PORT_HW_CFG_MEDIA_TYPE_PHY_SHIFT * idx.idx() as u32;
        media_types &= !(PORT_HW_CFG_MEDIA_TYPE_PHY_MASK << shift);
        media_types |= (phy.media_type.as_raw() & PORT_HW_CFG_MEDIA_TYPE_PHY_MASK) << shift;
    }
    host.reg_write(sync_offset, media_types);

    if check_limiting_mode {
        let mut options = [0u8; SFP_EEPROM_OPTIONS_SIZE];
        read_sfp_module_eeprom(host, phy, SFP_EEPROM_OPTIONS_ADDR, &mut options)?;

        edc_mode = if options[0] & SFP_EEPROM_OPTIONS_LINEAR_RX_OUT_MASK != 0 {
            EDC_MODE_LINEAR
        } else {
            EDC_MODE_LIMITING
        };
    }

    log::debug!("elink: EDC mode is set to 0x{:x}", edc_mode);
    Ok(edc_mode)
}

pub fn enforcement_policy(host: &mut dyn ElinkHost, params: &Params) -> u32 {
    host.reg_read(params.port_feature_addr(SHMEM_PORT_FEATURE_CONFIG))
        & PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_MASK
}

/// verify_sfp_module - Ask the management firmware whether the module is approved
///
/// An unapproved module is reported through `EventLog::UnqualifiedIoModule`
/// and marked with `PhyFlags::SFP_NOT_APPROVED`.
pub fn verify_sfp_module(
    host: &mut dyn ElinkHost,
    phy: &mut Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    phy.flags.remove(PhyFlags::SFP_NOT_APPROVED);

    if enforcement_policy(host, params) == PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_NO_ENFORCEMENT {
        log::debug!("elink: NOT enforcing module verification");
        return Ok(());
    }

    let cmd = if params.feature_config.bc_supports_dual_phy_opt_mdl_vrfy {
        DRV_MSG_CODE_VRFY_SPECIFIC_PHY_OPT_MDL
    } else if params.feature_config.bc_supports_opt_mdl_vrfy && !params.dual_media() {
        // The first-PHY request cannot name the second cage.
        DRV_MSG_CODE_VRFY_FIRST_PHY_OPT_MDL
    } else {
        log::debug!("elink: FW does not support OPT MDL verification");
        return Err(ElinkDriverErr::UnsupportedConfiguration);
    };

    let fw_cmd_param = phy.addr as u32
        | phy.phy_type.ext_phy_type_code()
        | (phy.mdio_ctrl << FW_PARAM_MDIO_CTRL_OFFSET);
    if host.firmware_command(cmd, fw_cmd_param) == FW_MSG_CODE_VRFY_OPT_MDL_SUCCESS {
        log::debug!("elink: approved module");
        return Ok(());
    }

    let mut vendor_name = [0u8; SFP_EEPROM_VENDOR_NAME_SIZE];
    if read_sfp_module_eeprom(host, phy, SFP_EEPROM_VENDOR_NAME_ADDR, &mut vendor_name).is_err() {
        vendor_name = [0; SFP_EEPROM_VENDOR_NAME_SIZE];
    }

    let mut vendor_pn = [0u8; SFP_EEPROM_PART_NO_SIZE];
    if read_sfp_module_eeprom(host, phy, SFP_EEPROM_PART_NO_ADDR, &mut vendor_pn).is_err() {
        vendor_pn = [0; SFP_EEPROM_PART_NO_SIZE];
    }

    host.event_log(EventLog::UnqualifiedIoModule {
        port: params.port,
        vendor_name,
        vendor_pn,
    });

    phy.flags.insert(PhyFlags::SFP_NOT_APPROVED);
    Err(ElinkDriverErr::HardwareFault)
}

/// Hot-plugged modules may take up to 300ms to answer on the two-wire bus.
pub fn wait_for_sfp_module_initialized(
    host: &mut dyn ElinkHost,
    phy: &Phy,
) -> Result<(), ElinkDriverErr> {
    let mut val = [0u8; 1];
    for timeout in 0..60 {
        if read_sfp_module_eeprom(host, phy, 1, &mut val).is_ok() {
            log::debug!("elink: SFP+ module initialization took {} ms", timeout * 5);
            return Ok(());
        }
        msleep(host, 5);
    }

    Err(ElinkDriverErr::Timeout)
}

/// power_module_8727 - Switch the module power GPIO of the 8727
///
/// Bit 4 of the GPIO control selects input mode, which also listens for
/// the over-current indication. Not used when over-current detection is off.
pub fn power_module_8727(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    is_power_up: bool,
) -> Result<(), ElinkDriverErr> {
    if phy.flags.contains(PhyFlags::NOC) {
        return Ok(());
    }

    let val = if is_power_up { 1 << 4 } else { 1 << 1 };
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_8727_GPIO_CTRL, val)
}

fn set_limiting_mode_8726(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    edc_mode: u16,
) -> Result<(), ElinkDriverErr> {
    let cur_limiting_mode = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2)?;
    log::debug!("elink: current limiting mode is 0x{:x}", cur_limiting_mode);

    if edc_mode == EDC_MODE_LIMITING {
        log::debug!("elink: setting LIMITING MODE");
        return cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2, EDC_MODE_LIMITING);
    }

    // Switching to LRM takes seconds, only do it when leaving limiting mode.
    if cur_limiting_mode != EDC_MODE_LIMITING {
        return Ok(());
    }

    log::debug!("elink: setting LRM MODE");
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LRM_MODE, 0)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2, 0x128)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_MISC_CTRL0, 0x4008)?;
    cl45_write(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_LRM_MODE, 0xaaaa)
}

fn set_limiting_mode_8727(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    edc_mode: u16,
) -> Result<(), ElinkDriverErr> {
    let phy_identifier = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_PHY_IDENTIFIER)?;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_PHY_IDENTIFIER,
        phy_identifier & !(1 << 9),
    )?;

    // Keep the upper byte, the lower one carries the mode.
    let rom_ver2 = cl45_read(host, phy, MDIO_PMA_DEVAD, MDIO_PMA_REG_ROM_VER2)?;
    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_ROM_VER2,
        (rom_ver2 & 0xff00) | (edc_mode & 0x00ff),
    )?;

    cl45_write(
        host,
        phy,
        MDIO_PMA_DEVAD,
        MDIO_PMA_REG_PHY_IDENTIFIER,
        phy_identifier | (1 << 9),
    )
}

/// Drive the "faulty module" LED, if the board wires one.
pub fn set_sfp_module_fault_led(host: &mut dyn ElinkHost, params: &Params, mode: GpioMode) {
    let fault_led_gpio = host.reg_read(params.port_hw_addr(SHMEM_PORT_HW_SFP_CTRL))
        & PORT_HW_CFG_FAULT_MODULE_LED_MASK;

    match fault_led_gpio {
        PORT_HW_CFG_FAULT_MODULE_LED_DISABLED => (),
        PORT_HW_CFG_FAULT_MODULE_LED_GPIO0
        | PORT_HW_CFG_FAULT_MODULE_LED_GPIO1
        | PORT_HW_CFG_FAULT_MODULE_LED_GPIO2
        | PORT_HW_CFG_FAULT_MODULE_LED_GPIO3 => {
            let gpio_port = get_gpio_port(host, params);
            let pin = ((fault_led_gpio - PORT_HW_CFG_FAULT_MODULE_LED_GPIO0) >> 8) as u8;
            log::debug!(
                "elink: set fault module-detected led pin {} port {} mode {:?}",
                pin,
                gpio_port,
                mode
            );
            host.gpio_write(pin, mode, gpio_port);
        }
        _ => log::debug!("elink: invalid fault led mode 0x{:x}", fault_led_gpio),
    }
}

/// sfp_module_detection - Configure the PHY for a newly plugged module
///
/// Returns `HardwareFault` when the module failed verification. Depending
/// on the enforcement policy the laser is kept off or the module powered down.
pub fn sfp_module_detection(
    host: &mut dyn ElinkHost,
    phy: &mut Phy,
    params: &Params,
) -> Result<(), ElinkDriverErr> {
    let policy = enforcement_policy(host, params);
    log::debug!(
        "elink: SFP+ module plugged in/out detected on port {}",
        params.port
    );

    let edc_mode = match get_edc_mode(host, phy, params) {
        Ok(edc_mode) => edc_mode,
        Err(e) => {
            log::debug!("elink: failed to get valid module type");
            return Err(e);
        }
    };

    let verified = match verify_sfp_module(host, phy, params) {
        Ok(()) => {
            set_sfp_module_fault_led(host, params, GpioMode::OutputLow);
            Ok(())
        }
        Err(e) => {
            log::debug!("elink: module verification failed");
            set_sfp_module_fault_led(host, params, GpioMode::OutputHigh);

            if phy.phy_type == PhyType::Bcm8727
                && policy == PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_POWER_DOWN
            {
                log::debug!("elink: shutdown SFP+ module");
                power_module_8727(host, phy, false)?;
                return Err(e);
            }
            Err(e)
        }
    };

    if phy.phy_type == PhyType::Bcm8727 {
        power_module_8727(host, phy, true)?;
    }

    // The 8727 picks limiting or LRM mode by itself once told the EDC mode.
    if phy.phy_type == PhyType::Bcm8726 {
        set_limiting_mode_8726(host, phy, edc_mode)?;
    } else {
        set_limiting_mode_8727(host, phy, edc_mode)?;
    }

    // Unapproved modules keep the laser on unless the policy says otherwise.
    let tx_en = verified.is_ok() || policy != PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_DISABLE_TX_LASER;
    sfp_set_transmitter(host, phy, params, tx_en)?;

    verified
}

/// handle_module_detect_int - Service a module plug/unplug interrupt on GPIO3
pub fn handle_module_detect_int(params: &mut Params, host: &mut dyn ElinkHost) {
    let port = params.port;
    let mut phy = *params.phy(PhyIndex::External1);

    // Set valid module led off
    set_sfp_module_fault_led(host, params, GpioMode::OutputHigh);

    // Low level on GPIO3 means a module is seated.
    if host.gpio_read(MISC_REGISTERS_GPIO_3, port) == 0 {
        host.gpio_int_write(MISC_REGISTERS_GPIO_3, GpioIntMode::OutputClear, port);

        if wait_for_sfp_module_initialized(host, &phy).is_ok() {
            if let Err(e) = sfp_module_detection(host, &mut phy, params) {
                log::debug!("elink: port {} module detection: {}", port, e);
            }
        } else {
            log::debug!("elink: SFP+ module is not initialized");
        }
    } else {
        host.gpio_int_write(MISC_REGISTERS_GPIO_3, GpioIntMode::OutputSet, port);

        // Module was plugged out
        phy.media_type = MediaType::NotPresent;
        if enforcement_policy(host, params) == PORT_FEAT_CFG_OPT_MDL_ENFRCMNT_DISABLE_TX_LASER {
            if let Err(e) = sfp_set_transmitter(host, &phy, params, false) {
                log::debug!("elink: port {} TX disable failed: {}", port, e);
            }
        }
    }

    *params.phy_mut(PhyIndex::External1) = phy;
}

/// Mask the fault event while the alarm is set, enable it otherwise.
pub fn sfp_mask_fault(
    host: &mut dyn ElinkHost,
    phy: &Phy,
    alarm_status_offset: u16,
    alarm_ctrl_offset: u16,
) -> Result<(), ElinkDriverErr> {
    // Latched, read twice.
    cl45_read(host, phy, MDIO_PMA_DEVAD, alarm_status_offset)?;
    let alarm_status = cl45_read(host, phy, MDIO_PMA_DEVAD, alarm_status_offset)?;

    let mut val = cl45_read(host, phy, MDIO_PMA_DEVAD, alarm_ctrl_offset)?;
    if alarm_status & (1 << 0) != 0 {
        val &= !(1 << 0);
    } else {
        val |= 1 << 0;
    }
    cl45_write(host, phy, MDIO_PMA_DEVAD, alarm_ctrl_offset, val)
}

/// init_mod_abs_int - Route the 8726 module-absent GPIO to the port's attention line
///
/// The resulting AEU mask is kept in `vars` and published in shared memory.
pub fn init_mod_abs_int(params: &Params, vars: &mut Vars, host: &mut dyn ElinkHost) {
    vars.aeu_int_mask = 0;

    let has_8726 = PhyIndex::EXTERNAL
        .iter()
        .any(|idx| params.phy(*idx).phy_type == PhyType::Bcm8726);
    if !has_8726 {
        return;
    }

    let gpio_num = MISC_REGISTERS_GPIO_3;
    let port = params.port;

    // Set GPIO3 to trigger SFP+ module insertion/removal
    host.gpio_write(gpio_num, GpioMode::InputHiZ, port);

    let swap_val = host.reg_read(NIG_REG_PORT_SWAP);
    let swap_override = host.reg_read(NIG_REG_STRAP_OVERRIDE);
    let gpio_port = (port ^ (swap_val != 0 && swap_override != 0) as u8) as u32;
    let gpio_shift = gpio_num as u32 + (gpio_port << 2);

    vars.aeu_int_mask = AEU_INPUTS_ATTN_BITS_GPIO0_FUNCTION_0 << gpio_shift;
    host.reg_write(
        params.port_hw_addr(SHMEM_PORT_HW_AEU_INT_MASK),
        vars.aeu_int_mask,
    );
    log::debug!(
        "elink: setting MOD_ABS (GPIO{}_P{}) AEU to 0x{:x}",
        gpio_num,
        gpio_port,
        vars.aeu_int_mask
    );

    // Open appropriate AEU for interrupts
    let offset = if port == 0 {
        MISC_REG_AEU_ENABLE1_FUNC_0_OUT_0
    } else {
        MISC_REG_AEU_ENABLE1_FUNC_1_OUT_0
    };
    let aeu_mask = host.reg_read(offset) | vars.aeu_int_mask;
    host.reg_write(offset, aeu_mask);

    // Enable the GPIO to trigger interrupt
    let val = host.reg_read(MISC_REG_GPIO_EVENT_EN) | (1 << gpio_shift);
    host.reg_write(MISC_REG_GPIO_EVENT_EN, val);
}
